// 公开导出的模块，供外部使用
pub mod models;
pub mod parser;
pub mod errors;
pub mod config;
pub mod scrapers;
pub mod services;

#[doc(hidden)]
pub mod util;

// 重新导出常用类型，方便使用
pub use models::series::{CellValue, DayRecord, SeriesDataset};
pub use models::period::PeriodRange;
pub use config::Config;
pub use services::data_service::DataService;
pub use errors::{Result, IndexHubError};
