//! 在原始标记中定位第一个真实出现的 `<tbody>` 开始标签
//!
//! html5ever 的树构建器会为缺少 tbody 的表格自动补齐一个，因此在 DOM 中无法区分
//! 真实的和补齐的 tbody。这里先用分词器扫描原始标记 (脚本、样式、注释中的内容不算)，
//! 找到第一个真实的 tbody 开始标签，给它加上标记属性后再交给 scraper 解析。

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::Cell;

/// 标记第一个真实 tbody 的属性名
pub const TABLE_BODY_MARKER: &str = "data-indexhub-table";

#[derive(Default)]
struct TableBodyFinder {
    found: Cell<bool>,
}

impl TokenSink for TableBodyFinder {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let tag = match token {
            Token::TagToken(tag) if tag.kind == TagKind::StartTag => tag,
            _ => return TokenSinkResult::Continue,
        };

        // 与树构建器一致：这些元素的内容不再作为标签解析
        match &*tag.name {
            "tbody" => {
                self.found.set(true);
                TokenSinkResult::Continue
            }
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "textarea" | "title" => TokenSinkResult::RawData(RawKind::Rcdata),
            "plaintext" => TokenSinkResult::Plaintext,
            _ => TokenSinkResult::Continue,
        }
    }
}

/// 第一个真实 tbody 开始标签之后的字节位置
fn first_table_body_end(html: &str) -> Option<usize> {
    let tokenizer = Tokenizer::new(TableBodyFinder::default(), TokenizerOpts::default());
    let queue = BufferQueue::default();
    let mut offset = 0;

    // 每段以 '>' 结尾，标签在所属分段送入时即被发出
    for chunk in html.split_inclusive('>') {
        offset += chunk.len();
        queue.push_back(StrTendril::from_slice(chunk));
        let _ = tokenizer.feed(&queue);

        if tokenizer.sink.found.get() {
            return Some(offset);
        }
    }

    tokenizer.end();
    None
}

/// 给第一个真实的 tbody 加上 `TABLE_BODY_MARKER` 属性，没有则返回 None
pub fn mark_first_table_body(html: &str) -> Option<String> {
    let end = first_table_body_end(html)?;

    // end 指向 '>' 之后；自闭合写法插在 '/' 之前
    let mut insert_at = end - 1;
    if html[..insert_at].ends_with('/') {
        insert_at -= 1;
    }

    let mut marked = String::with_capacity(html.len() + TABLE_BODY_MARKER.len() + 1);
    marked.push_str(&html[..insert_at]);
    marked.push(' ');
    marked.push_str(TABLE_BODY_MARKER);
    marked.push_str(&html[insert_at..]);
    Some(marked)
}
