use chrono::{DateTime, NaiveDate};
use std::fmt;

/// 查询区间：一对UNIX时间戳 (period1, period2)
///
/// 数据源单次请求无法返回过长的时间跨度，因此按季度切片分页抓取。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    start: i64,
    end: i64,
}

/// 2020年1月1日至2021年3月31日，按自然季度连续切分
pub const DEFAULT_PERIODS: [PeriodRange; 5] = [
    PeriodRange::new(1577836800, 1585699200), // 2020 Q1
    PeriodRange::new(1585699200, 1593561600), // 2020 Q2
    PeriodRange::new(1593561600, 1601510400), // 2020 Q3
    PeriodRange::new(1601510400, 1609459200), // 2020 Q4
    PeriodRange::new(1609459200, 1617235200), // 2021 Q1
];

impl PeriodRange {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// 由两个日期 (UTC零点) 构造区间
    #[cfg(test)]
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> crate::errors::Result<Self> {
        use crate::errors::IndexHubError;

        if start >= end {
            return Err(IndexHubError::InvalidArgument(format!(
                "Period start {} must be before end {}", start, end
            )));
        }

        let to_timestamp = |date: NaiveDate| {
            date.and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp())
                .ok_or_else(|| IndexHubError::InvalidArgument(format!("Invalid date: {}", date)))
        };

        Ok(Self::new(to_timestamp(start)?, to_timestamp(end)?))
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp(self.start, 0).map(|dt| dt.date_naive())
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        DateTime::from_timestamp(self.end, 0).map(|dt| dt.date_naive())
    }
}

impl fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start_date(), self.end_date()) {
            (Some(start), Some(end)) => write!(f, "{} ~ {}", start, end),
            _ => write!(f, "{} ~ {}", self.start, self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IndexHubError;

    #[test]
    fn test_default_periods_are_contiguous_quarters() {
        for pair in DEFAULT_PERIODS.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }

        assert_eq!(DEFAULT_PERIODS[0].start_date(), NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(DEFAULT_PERIODS[1].start_date(), NaiveDate::from_ymd_opt(2020, 4, 1));
        assert_eq!(DEFAULT_PERIODS[2].start_date(), NaiveDate::from_ymd_opt(2020, 7, 1));
        assert_eq!(DEFAULT_PERIODS[3].start_date(), NaiveDate::from_ymd_opt(2020, 10, 1));
        assert_eq!(DEFAULT_PERIODS[4].start_date(), NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(DEFAULT_PERIODS[4].end_date(), NaiveDate::from_ymd_opt(2021, 4, 1));
    }

    #[test]
    fn test_from_dates() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
        let period = PeriodRange::from_dates(start, end).unwrap();
        assert_eq!(period, DEFAULT_PERIODS[0]);
        assert_eq!(period.to_string(), "2020-01-01 ~ 2020-04-01");

        assert!(matches!(
            PeriodRange::from_dates(end, start),
            Err(IndexHubError::InvalidArgument(_))
        ));
    }
}
