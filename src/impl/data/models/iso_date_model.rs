use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;

use crate::errors::{InvalidIsoDate, InvalidIsoDateTime};

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> NaiveDate {
        model.0
    }
}

/// Creation timestamps. A bare date is read as midnight.
#[derive(Debug)]
pub(crate) struct ISODateTimeModel(NaiveDateTime);
impl FromStr for ISODateTimeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Ok(ISODateTimeModel(dt));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Ok(ISODateTimeModel(dt));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|d| ISODateTimeModel(d.and_time(chrono::NaiveTime::MIN)))
            .map_err(|e| InvalidIsoDateTime::with_debug(s, &e))
    }
}

impl From<ISODateTimeModel> for NaiveDateTime {
    fn from(model: ISODateTimeModel) -> NaiveDateTime {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        let d: NaiveDate = ISODateModel::from_str("2025-01-15").unwrap().into();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert!(ISODateModel::from_str("15/01/2025").is_err());
        assert!(ISODateModel::from_str("2025-02-30").is_err());
    }

    #[test]
    fn test_iso_datetime_accepts_both_separators_and_bare_dates() {
        let a: NaiveDateTime = ISODateTimeModel::from_str("2025-01-02T09:30:00").unwrap().into();
        let b: NaiveDateTime = ISODateTimeModel::from_str("2025-01-02 09:30:00").unwrap().into();
        assert_eq!(a, b);
        let c: NaiveDateTime = ISODateTimeModel::from_str("2025-01-02").unwrap().into();
        assert_eq!(c.to_string(), "2025-01-02 00:00:00");
        assert!(ISODateTimeModel::from_str("yesterday").is_err());
    }
}
