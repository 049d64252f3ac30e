use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexHubError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("HTML parsing error: {0}")]
    ParseError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, IndexHubError>;

// 用于从字符串创建错误
impl From<String> for IndexHubError {
    fn from(s: String) -> Self {
        IndexHubError::Unknown(s)
    }
}

// 用于从&str创建错误
impl From<&str> for IndexHubError {
    fn from(s: &str) -> Self {
        IndexHubError::Unknown(s.to_string())
    }
}
