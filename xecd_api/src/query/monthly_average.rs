use super::common::{Query, QueryParams, Resource};
use super::conversion::{Conversion, ConversionQuery};

/// Monthly average rates (`monthly_average.json`).
#[derive(Clone, Debug, Default)]
pub struct MonthlyAverageQuery {
    pub conversion: Conversion,
    pub year: Option<i32>,
    /// 1-12. `None` requests every month of the year.
    pub month: Option<u32>,
    pub overrides: QueryParams,
}

impl Query for MonthlyAverageQuery {
    fn resource(&self) -> Resource {
        Resource::MonthlyAverage
    }
    fn default_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.conversion.insert_into(&mut params);
        params.insert("year", self.year);
        params.insert("month", self.month);
        params
    }
    fn overrides(&self) -> &QueryParams {
        &self.overrides
    }
    fn overrides_mut(&mut self) -> &mut QueryParams {
        &mut self.overrides
    }
}

impl ConversionQuery for MonthlyAverageQuery {
    fn get_conversion(&mut self) -> &mut Conversion {
        &mut self.conversion
    }
}

impl MonthlyAverageQuery {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
    pub fn with_month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }
}
