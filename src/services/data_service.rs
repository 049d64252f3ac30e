use crate::config::Config;
use crate::errors::Result;
use crate::models::series::SeriesDataset;
use crate::parser::parse_history_table;
use crate::scrapers::base::PageFetcher;
use crate::scrapers::yahoo::history_url;
use crate::util::json_utils;
use log::{debug, error, info};
use std::path::PathBuf;
use std::sync::Arc;

/// 数据服务，按区间抓取、解析并合并指数历史数据
pub struct DataService {
    config: Config,
    fetcher: Arc<dyn PageFetcher + Send + Sync>,
}

impl DataService {
    /// 创建新的数据服务实例
    pub fn new(config: Config, fetcher: Arc<dyn PageFetcher + Send + Sync>) -> Self {
        Self { config, fetcher }
    }

    /// 指数对应的输出文件路径
    pub fn output_path(&self, ticker: &str) -> PathBuf {
        PathBuf::from(&self.config.data_dir).join(format!("{}_data.json", ticker.to_lowercase()))
    }

    /// 依次抓取全部区间，合并为从旧到新的序列
    ///
    /// 任一区间失败则整体失败，不返回部分结果。
    pub async fn assemble(&self, ticker: &str) -> Result<SeriesDataset> {
        let mut dataset = SeriesDataset::new(ticker);

        for (i, range) in self.config.periods.iter().enumerate() {
            let period = i + 1;
            let url = history_url(&self.config, ticker, period)?;
            info!("Fetching {} period {} ({}) from {}",
                  ticker, period, range, self.fetcher.source_name());

            let page = self.fetcher.fetch_page(&url).await?;
            let mut records = parse_history_table(&page)?;
            debug!("{} 区间 {}: {} 条记录", ticker, period, records.len());

            // 页面按从新到旧排列
            records.reverse();
            dataset.records.extend(records);
        }

        info!("Assembled {} records for {}", dataset.len(), ticker);
        Ok(dataset)
    }

    /// 处理单个指数并写出JSON文件，返回文件路径
    pub async fn process_ticker(&self, ticker: &str) -> Result<PathBuf> {
        let dataset = self.assemble(ticker).await?;
        let path = self.output_path(&dataset.ticker);
        json_utils::save_series_json(&dataset.records, &path)?;

        info!("Successfully processed {}: {}", dataset.ticker, path.display());
        Ok(path)
    }

    /// 按配置顺序处理全部指数
    pub async fn process_all(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        let mut failed = Vec::new();

        for ticker in &self.config.tickers {
            match self.process_ticker(ticker).await {
                Ok(path) => written.push(path),
                Err(e) if self.config.isolate_failures => {
                    error!("Failed to process {}: {}", ticker, e);
                    failed.push(ticker.clone());
                }
                Err(e) => return Err(e),
            }
        }

        if !failed.is_empty() {
            return Err(format!("{} 个指数处理失败: {}", failed.len(), failed.join(", ")).into());
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::IndexHubError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 记录请求URL，并对所有请求返回同一页面
    struct EchoFetcher {
        page: String,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PageFetcher for EchoFetcher {
        fn source_name(&self) -> &'static str {
            "echo"
        }

        async fn fetch_page(&self, url: &str) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(self.page.clone())
        }
    }

    fn page_with_dates(dates: &[&str]) -> String {
        let rows: String = dates
            .iter()
            .map(|d| {
                format!(
                    "<tr><td><span>{}</span></td>{}</tr>",
                    d,
                    "<td><span>1.0</span></td>".repeat(6)
                )
            })
            .collect();
        format!("<table><tbody>{}</tbody></table>", rows)
    }

    #[tokio::test]
    async fn test_assemble_requests_periods_in_order() {
        let fetcher = Arc::new(EchoFetcher {
            page: page_with_dates(&["Jan 03, 2020", "Jan 02, 2020"]),
            requested: Mutex::new(Vec::new()),
        });
        let service = DataService::new(Config::new(), fetcher.clone());

        let dataset = service.assemble("DJI").await.unwrap();
        assert_eq!(dataset.ticker, "DJI");
        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.records[0].date.as_text(), Some("Jan 02, 2020"));
        assert_eq!(dataset.records[1].date.as_text(), Some("Jan 03, 2020"));

        let requested = fetcher.requested.lock().unwrap();
        assert_eq!(requested.len(), 5);
        assert!(requested[0].contains("period1=1577836800&period2=1585699200"));
        assert!(requested[4].contains("period1=1609459200&period2=1617235200"));
    }

    #[tokio::test]
    async fn test_assemble_fails_without_table() {
        let fetcher = Arc::new(EchoFetcher {
            page: "<html><body>Too many requests</body></html>".to_string(),
            requested: Mutex::new(Vec::new()),
        });
        let service = DataService::new(Config::new(), fetcher.clone());

        assert!(matches!(
            service.assemble("GSPC").await,
            Err(IndexHubError::TableNotFound(_))
        ));
        // 第一个区间失败后不再继续请求
        assert_eq!(fetcher.requested.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_output_path_uses_lowercase_ticker() {
        let fetcher = Arc::new(EchoFetcher {
            page: String::new(),
            requested: Mutex::new(Vec::new()),
        });
        let service = DataService::new(Config::new().with_data_dir("out"), fetcher);
        assert_eq!(service.output_path("GSPC"), PathBuf::from("out").join("gspc_data.json"));
    }
}
