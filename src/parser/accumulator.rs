use crate::models::series::{CellValue, DayRecord, COLUMN_COUNT};

/// 单元格流结束时累加器中剩余的内容
#[derive(Debug, PartialEq)]
pub enum Tail {
    /// 没有待处理的单元格
    Empty,
    /// 最后一条记录已填满全部列
    Complete(DayRecord),
    /// 不完整的末尾记录，被丢弃，附带已收集的单元格数量
    Partial(usize),
}

/// Positional record builder.
///
/// Cells are pushed one by one, ignoring row boundaries. State is the list of
/// fields collected for the current record; once it holds `COLUMN_COUNT`
/// fields, the next push emits the record and starts a new one at column 1.
#[derive(Debug, Default)]
pub struct RecordAccumulator {
    fields: Vec<CellValue>,
}

impl RecordAccumulator {
    pub fn new() -> Self {
        Self {
            fields: Vec::with_capacity(COLUMN_COUNT),
        }
    }

    /// 下一个单元格所在的列 (1..=COLUMN_COUNT)
    pub fn next_column(&self) -> usize {
        if self.fields.len() == COLUMN_COUNT {
            1
        } else {
            self.fields.len() + 1
        }
    }

    pub fn push(&mut self, value: CellValue) -> Option<DayRecord> {
        let completed = if self.fields.len() == COLUMN_COUNT {
            let full = std::mem::replace(&mut self.fields, Vec::with_capacity(COLUMN_COUNT));
            DayRecord::from_fields(full)
        } else {
            None
        };

        self.fields.push(value);
        completed
    }

    pub fn finish(self) -> Tail {
        match self.fields.len() {
            0 => Tail::Empty,
            COLUMN_COUNT => DayRecord::from_fields(self.fields)
                .map(Tail::Complete)
                .unwrap_or(Tail::Empty),
            n => Tail::Partial(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(i: usize) -> CellValue {
        CellValue::Number(i as f64)
    }

    #[test]
    fn test_emits_record_on_overflow() {
        let mut acc = RecordAccumulator::new();
        for i in 0..COLUMN_COUNT {
            assert_eq!(acc.next_column(), i + 1);
            assert!(acc.push(cell(i)).is_none());
        }

        // 第8个单元格触发上一条记录的输出，并成为新记录的第1列
        assert_eq!(acc.next_column(), 1);
        let record = acc.push(cell(100)).unwrap();
        assert_eq!(record.date, cell(0));
        assert_eq!(record.volume, cell(COLUMN_COUNT - 1));
        assert_eq!(acc.next_column(), 2);

        assert_eq!(acc.finish(), Tail::Partial(1));
    }

    #[test]
    fn test_finish_outcomes() {
        assert_eq!(RecordAccumulator::new().finish(), Tail::Empty);

        let mut acc = RecordAccumulator::new();
        for i in 0..COLUMN_COUNT {
            acc.push(cell(i));
        }
        assert!(matches!(acc.finish(), Tail::Complete(r) if r.adj_close == cell(5)));

        let mut acc = RecordAccumulator::new();
        for i in 0..3 {
            acc.push(cell(i));
        }
        assert_eq!(acc.finish(), Tail::Partial(3));
    }
}
