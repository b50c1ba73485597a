use crate::utils::error::{GradebookError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 必填文字欄位：只檢查是否為空字串，空白內容照原樣保留
pub fn validate_required_text(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GradebookError::invalid_argument(
            field_name,
            "Value cannot be empty",
        ));
    }
    Ok(())
}

pub fn validate_required_value<T>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| GradebookError::invalid_argument(field_name, "Value is required"))
}

fn invalid_config(field_name: &str, value: impl ToString, reason: &str) -> GradebookError {
    GradebookError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// 資料檔路徑：不可為空、不可含 NUL、不可指向目錄
pub fn validate_file_path(field_name: &str, path: &str) -> Result<()> {
    let reason = if path.is_empty() {
        "Path cannot be empty"
    } else if path.contains('\0') {
        "Path contains null bytes"
    } else if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
        "Path must name a file, not a directory"
    } else {
        return Ok(());
    };
    Err(invalid_config(field_name, path, reason))
}

pub fn validate_min_count(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value >= min_value {
        return Ok(());
    }
    Err(invalid_config(
        field_name,
        value,
        &format!("Value must be at least {}", min_value),
    ))
}
