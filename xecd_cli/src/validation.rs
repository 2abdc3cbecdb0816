//! Input validation for CLI flags.
//!
//! The library sends whatever it is given; these checks catch typos before
//! they cost an API call.

use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use xecd_api::QueryValue;

/// Validate a currency code: three ASCII letters, or `*` for all. Returns it upper-cased.
pub fn validate_currency(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed == "*" {
        return Ok(trimmed.to_string());
    }
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!(
            "invalid currency code '{}'. Expected a 3-letter ISO 4217 code (e.g., USD) or '*'",
            trimmed
        );
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Validate a comma-separated list of currency codes.
pub fn validate_currency_list(input: &str) -> Result<String> {
    let codes = input
        .split(',')
        .map(validate_currency)
        .collect::<Result<Vec<_>>>()?;
    Ok(codes.join(","))
}

pub fn validate_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2016-12-25)",
            trimmed
        ),
    }
}

pub fn validate_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    match NaiveTime::parse_from_str(trimmed, "%H:%M") {
        Ok(time) => Ok(time),
        Err(_) => bail!("invalid time '{}'. Expected format: HH:MM (e.g., 12:34)", trimmed),
    }
}

/// Accepts `YYYY-MM-DDTHH:MM`, or a bare date meaning midnight.
pub fn validate_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Ok(ts);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    bail!(
        "invalid timestamp '{}'. Expected YYYY-MM-DDTHH:MM or YYYY-MM-DD",
        trimmed
    )
}

pub fn validate_month(month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        bail!("month must be between 1 and 12, got {}", month);
    }
    Ok(month)
}

pub fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        bail!("amount must be a positive number, got {}", amount);
    }
    Ok(amount)
}

/// Parse a `key=value` override. The value becomes a bool, integer or
/// float when it reads as one and prints back unchanged, `null` when it is
/// literally `null`, and a string otherwise.
pub fn parse_param(input: &str) -> Result<(String, QueryValue)> {
    let Some((key, raw)) = input.split_once('=') else {
        bail!("invalid parameter '{}'. Expected KEY=VALUE", input);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("invalid parameter '{}': empty key", input);
    }
    let value = if raw == "null" {
        QueryValue::Null
    } else if let Ok(b) = raw.parse::<bool>() {
        QueryValue::Bool(b)
    } else if let Some(i) = raw.parse::<i64>().ok().filter(|i| i.to_string() == raw) {
        QueryValue::Int(i)
    } else if let Some(f) = raw
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && f.to_string() == raw)
    {
        QueryValue::Float(f)
    } else {
        QueryValue::Str(raw.to_string())
    };
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_codes() {
        assert_eq!(validate_currency("usd").unwrap(), "USD");
        assert_eq!(validate_currency(" EUR ").unwrap(), "EUR");
        assert_eq!(validate_currency("*").unwrap(), "*");
        assert!(validate_currency("US").is_err());
        assert!(validate_currency("US1").is_err());
        assert!(validate_currency("").is_err());
    }

    #[test]
    fn currency_lists() {
        assert_eq!(validate_currency_list("cad,eur").unwrap(), "CAD,EUR");
        assert_eq!(validate_currency_list("*").unwrap(), "*");
        assert!(validate_currency_list("CAD,,EUR").is_err());
    }

    #[test]
    fn dates_and_times() {
        assert_eq!(
            validate_date("2016-12-25").unwrap(),
            NaiveDate::from_ymd_opt(2016, 12, 25).unwrap()
        );
        assert!(validate_date("25/12/2016").is_err());
        assert_eq!(
            validate_time("12:34").unwrap(),
            NaiveTime::from_hms_opt(12, 34, 0).unwrap()
        );
        assert!(validate_time("25:00").is_err());
    }

    #[test]
    fn timestamps() {
        let ts = validate_timestamp("2017-09-28T12:00").unwrap();
        assert_eq!(ts.format("%Y-%m-%dT%H:%M").to_string(), "2017-09-28T12:00");
        let midnight = validate_timestamp("2017-09-28").unwrap();
        assert_eq!(midnight.format("%H:%M").to_string(), "00:00");
        assert!(validate_timestamp("yesterday").is_err());
    }

    #[test]
    fn months_and_amounts() {
        assert_eq!(validate_month(5).unwrap(), 5);
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
        assert_eq!(validate_amount(55.0).unwrap(), 55.0);
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
    }

    #[test]
    fn params() {
        assert_eq!(
            parse_param("obsolete=true").unwrap(),
            ("obsolete".to_string(), QueryValue::Bool(true))
        );
        assert_eq!(
            parse_param("page=3").unwrap(),
            ("page".to_string(), QueryValue::Int(3))
        );
        assert_eq!(
            parse_param("margin=0.5").unwrap(),
            ("margin".to_string(), QueryValue::Float(0.5))
        );
        assert_eq!(
            parse_param("to=EUR,CAD").unwrap(),
            ("to".to_string(), QueryValue::from("EUR,CAD"))
        );
        assert_eq!(
            parse_param("year=null").unwrap(),
            ("year".to_string(), QueryValue::Null)
        );
        assert_eq!(
            parse_param("note=a=b").unwrap(),
            ("note".to_string(), QueryValue::from("a=b"))
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn params_keep_numbers_that_do_not_print_back() {
        for raw in ["01", "+5", "1.0", "1e3", "Infinity", "NaN", "inf"] {
            let (_, value) = parse_param(&format!("page={}", raw)).unwrap();
            assert_eq!(value, QueryValue::from(raw), "{}", raw);
            assert_eq!(value.to_query_string().as_deref(), Some(raw));
        }
        assert_eq!(parse_param("page=-2").unwrap().1, QueryValue::Int(-2));
    }
}
