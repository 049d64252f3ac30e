use crate::models::series::CellValue;

// 单元格数值转换：去掉千位分隔符后，只由数字和至多一个小数点组成的转换为数字
pub fn coerce_cell_value(raw: &str) -> CellValue {
    let no_comma = raw.replace(',', "");

    let mut digits = 0;
    let mut dots = 0;
    let numeric = no_comma.chars().all(|c| match c {
        '0'..='9' => {
            digits += 1;
            true
        }
        '.' => {
            dots += 1;
            dots <= 1
        }
        _ => false,
    });

    if numeric && digits > 0 {
        if let Ok(value) = no_comma.parse::<f64>() {
            return CellValue::Number(value);
        }
    }

    CellValue::Text(raw.to_string())
}

// JSON导出工具
pub mod json_utils {
    use crate::errors::{IndexHubError, Result};
    use crate::models::series::DayRecord;
    use log::info;
    use std::fs;
    use std::path::Path;

    /// 将记录序列保存为JSON数组，已存在的文件会被覆盖
    ///
    /// 先完整序列化到内存，再写入同目录下的临时文件并重命名，
    /// 不会留下只写了一半的文件。
    pub fn save_series_json(records: &[DayRecord], path: &Path) -> Result<()> {
        info!("Saving {} records to {}", records.len(), path.display());

        let bytes = serde_json::to_vec(records)?;

        let file_name = path.file_name().ok_or_else(|| {
            IndexHubError::DataError(format!("Invalid output path: {}", path.display()))
        })?;

        // 确保目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp_name = file_name.to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        let written = fs::write(&tmp_path, &bytes).and_then(|_| fs::rename(&tmp_path, path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        Ok(())
    }
}
