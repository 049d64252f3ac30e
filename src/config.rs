use std::time::Duration;

use crate::models::period::{PeriodRange, DEFAULT_PERIODS};

pub const DEFAULT_BASE_URL: &str = "https://finance.yahoo.com";
pub const DEFAULT_TICKERS: [&str; 2] = ["DJI", "GSPC"];

pub struct Config {
    pub base_url: String,
    pub tickers: Vec<String>,
    pub periods: Vec<PeriodRange>,
    pub data_dir: String,
    pub request_timeout: Duration,
    pub isolate_failures: bool, // 单个指数失败时是否继续处理其余指数
}

impl Config {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            tickers: DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect(),
            periods: DEFAULT_PERIODS.to_vec(),
            data_dir: "data".to_string(),
            request_timeout: Duration::from_secs(30),
            isolate_failures: false,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers = tickers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_periods(mut self, periods: Vec<PeriodRange>) -> Self {
        self.periods = periods;
        self
    }

    pub fn with_data_dir(mut self, dir: &str) -> Self {
        self.data_dir = dir.to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_isolate_failures(mut self, isolate: bool) -> Self {
        self.isolate_failures = isolate;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
