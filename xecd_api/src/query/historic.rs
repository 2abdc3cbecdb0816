//! Historic rate lookups: a single point in time, or a period.

use chrono::NaiveDateTime;

use super::common::{Query, QueryParams, Resource};
use super::conversion::{Conversion, ConversionQuery};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Rate at a given date and time (`historic_rate.json`).
#[derive(Clone, Debug)]
pub struct HistoricRateQuery {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, UTC
    pub time: String,
    pub conversion: Conversion,
    pub overrides: QueryParams,
}

impl HistoricRateQuery {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            conversion: Conversion::default(),
            overrides: QueryParams::new(),
        }
    }

    /// Builds the query from a UTC timestamp, truncated to the minute.
    pub fn at(datetime: NaiveDateTime) -> Self {
        Self::new(
            datetime.format(DATE_FORMAT).to_string(),
            datetime.format(TIME_FORMAT).to_string(),
        )
    }
}

impl Query for HistoricRateQuery {
    fn resource(&self) -> Resource {
        Resource::HistoricRate
    }
    fn default_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.conversion.insert_into(&mut params);
        params.insert("date", self.date.as_str());
        params.insert("time", self.time.as_str());
        params
    }
    fn overrides(&self) -> &QueryParams {
        &self.overrides
    }
    fn overrides_mut(&mut self) -> &mut QueryParams {
        &mut self.overrides
    }
}

impl ConversionQuery for HistoricRateQuery {
    fn get_conversion(&mut self) -> &mut Conversion {
        &mut self.conversion
    }
}

/// Rates over a time range (`historic_rate/period.json`).
///
/// `page` and `per_page` are sent as given; their meaning is up to the service.
#[derive(Clone, Debug)]
pub struct HistoricRatePeriodQuery {
    pub conversion: Conversion,
    /// `YYYY-MM-DDTHH:MM`. `None` lets the service pick.
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
    pub interval: String,
    pub page: i64,
    pub per_page: i64,
    pub overrides: QueryParams,
}

impl Default for HistoricRatePeriodQuery {
    fn default() -> Self {
        Self {
            conversion: Conversion::default(),
            start_timestamp: None,
            end_timestamp: None,
            interval: "DAILY".to_string(),
            page: 1,
            per_page: 30,
            overrides: QueryParams::new(),
        }
    }
}

impl Query for HistoricRatePeriodQuery {
    fn resource(&self) -> Resource {
        Resource::HistoricRatePeriod
    }
    fn default_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.conversion.insert_into(&mut params);
        params.insert("start_timestamp", self.start_timestamp.as_deref());
        params.insert("end_timestamp", self.end_timestamp.as_deref());
        params.insert("interval", self.interval.as_str());
        params.insert("page", self.page);
        params.insert("per_page", self.per_page);
        params
    }
    fn overrides(&self) -> &QueryParams {
        &self.overrides
    }
    fn overrides_mut(&mut self) -> &mut QueryParams {
        &mut self.overrides
    }
}

impl ConversionQuery for HistoricRatePeriodQuery {
    fn get_conversion(&mut self) -> &mut Conversion {
        &mut self.conversion
    }
}

impl HistoricRatePeriodQuery {
    pub fn with_start_timestamp(mut self, start: &str) -> Self {
        self.start_timestamp = Some(start.to_string());
        self
    }
    pub fn with_end_timestamp(mut self, end: &str) -> Self {
        self.end_timestamp = Some(end.to_string());
        self
    }
    /// Sets both ends of the range from UTC timestamps.
    pub fn with_period(self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.with_start_timestamp(&start.format(TIMESTAMP_FORMAT).to_string())
            .with_end_timestamp(&end.format(TIMESTAMP_FORMAT).to_string())
    }
    pub fn with_interval(mut self, interval: &str) -> Self {
        self.interval = interval.to_string();
        self
    }
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = per_page;
        self
    }
}
