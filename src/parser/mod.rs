//! 历史数据表格解析
//!
//! 源页面的历史数据表格固定为七列 (日期、开盘、最高、最低、收盘、复权收盘、成交量)，
//! 解析时不区分行，把第一个 `tbody` 中的全部 `td` 当作一个连续的单元格流，
//! 按位置依次填入记录。输出顺序与页面一致，即从新到旧。

pub mod accumulator;
pub mod markup;

use crate::errors::{IndexHubError, Result};
use crate::models::series::DayRecord;
use crate::util::coerce_cell_value;
use accumulator::{RecordAccumulator, Tail};
use log::{debug, warn};
use markup::{mark_first_table_body, TABLE_BODY_MARKER};
use scraper::{ElementRef, Html, Node, Selector};

/// 解析页面中第一个历史数据表格
pub fn parse_history_table(html: &str) -> Result<Vec<DayRecord>> {
    let not_found = || IndexHubError::TableNotFound("No table body found in the HTML passed".to_string());

    // 只认原始标记中真实出现的 tbody，不使用解析器补齐的
    let marked = mark_first_table_body(html).ok_or_else(not_found)?;

    let document = Html::parse_document(&marked);
    let tbody_selector = selector(&format!("tbody[{}]", TABLE_BODY_MARKER))?;
    let td_selector = selector("td")?;

    let tbody = document.select(&tbody_selector).next().ok_or_else(not_found)?;

    let mut accumulator = RecordAccumulator::new();
    let mut records = Vec::new();
    let mut cells = 0;

    for td in tbody.select(&td_selector) {
        cells += 1;
        let text = cell_text(td).ok_or_else(|| {
            IndexHubError::ParseError(format!(
                "Cannot extract text from cell #{} (column {})",
                cells,
                accumulator.next_column()
            ))
        })?;

        if let Some(record) = accumulator.push(coerce_cell_value(&text)) {
            records.push(record);
        }
    }

    match accumulator.finish() {
        // 最后一条完整记录同样保留，只丢弃不完整的末尾记录
        Tail::Complete(record) => records.push(record),
        Tail::Partial(n) => warn!("Dropping incomplete trailing record with {} cells", n),
        Tail::Empty => {}
    }

    debug!("解析 {} 个单元格，得到 {} 条记录", cells, records.len());
    Ok(records)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| IndexHubError::ParseError(format!("{:?}", e)))
}

/// 单元格的第一个子节点中，第一个 `>` 与最后一个 `<` 之间的文本
fn cell_text(td: ElementRef<'_>) -> Option<String> {
    let child = td.first_child()?;
    let markup = match child.value() {
        Node::Element(_) => ElementRef::wrap(child)?.html(),
        Node::Text(text) => text.to_string(),
        _ => return None,
    };

    between_markers(&markup).map(|s| s.to_string())
}

// 按行查找，不跨越换行
fn between_markers(markup: &str) -> Option<&str> {
    markup.lines().find_map(|line| {
        let open = line.find('>')?;
        let close = line.rfind('<')?;
        (close > open).then(|| &line[open + 1..close])
    })
}
