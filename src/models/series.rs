use serde::Serialize;

/// 历史数据表格的列，顺序即源表格中的单元格位置
pub const HISTORY_COLUMNS: [&str; 7] = ["date", "open", "high", "low", "close", "adj_close", "volume"];

/// 每条记录占用的单元格数量
pub const COLUMN_COUNT: usize = HISTORY_COLUMNS.len();

/// 单元格的值：能解析为数字的保存为数字，否则保留原始文本
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }
}

/// 日线数据结构
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: CellValue,
    pub open: CellValue,
    pub high: CellValue,
    pub low: CellValue,
    pub close: CellValue,
    pub adj_close: CellValue, // 源表格无数据时为占位文本
    pub volume: CellValue,
}

impl DayRecord {
    /// 按列位置构造记录，字段数量必须正好为 COLUMN_COUNT
    pub fn from_fields(fields: Vec<CellValue>) -> Option<Self> {
        let [date, open, high, low, close, adj_close, volume]: [CellValue; COLUMN_COUNT] =
            fields.try_into().ok()?;

        Some(Self {
            date,
            open,
            high,
            low,
            close,
            adj_close,
            volume,
        })
    }
}

/// Index series assembled across all periods, oldest first
#[derive(Debug, Clone, Serialize)]
pub struct SeriesDataset {
    pub ticker: String,
    pub records: Vec<DayRecord>,
}

impl SeriesDataset {
    pub fn new(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
