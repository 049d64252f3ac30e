use crate::config::Config;
use crate::errors::{IndexHubError, Result};
use crate::scrapers::base::PageFetcher;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// 构造指定指数、指定区间的历史数据页面URL
///
/// `ticker` 只包含字母，不带 `^` 前缀；`period` 从1开始编号。
pub fn history_url(config: &Config, ticker: &str, period: usize) -> Result<String> {
    if ticker.is_empty() || !ticker.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(IndexHubError::InvalidArgument(format!(
            "Ticker must contain letters only: {:?}", ticker
        )));
    }

    let range = period
        .checked_sub(1)
        .and_then(|i| config.periods.get(i))
        .ok_or_else(|| IndexHubError::InvalidArgument(format!(
            "Period {} out of range 1..={}", period, config.periods.len()
        )))?;

    Ok(format!(
        "{}/quote/%5E{}/history?period1={}&period2={}&interval=1d\
         &filter=history&frequency=1d&includeAdjustedClose=true",
        config.base_url,
        ticker,
        range.start(),
        range.end()
    ))
}

/// 雅虎财经历史页面抓取器
pub struct YahooScraper {
    client: Client,
}

impl YahooScraper {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(IndexHubError::RequestError)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for YahooScraper {
    fn source_name(&self) -> &'static str {
        "Yahoo"
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        debug!("成功获取响应, {} 字节", text.len());

        Ok(text)
    }
}
