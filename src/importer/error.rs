// ==========================================
// フロア配置システム - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("ファイルが存在しません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0}（.xlsx/.xls/.csv のみ）")]
    UnsupportedFormat(String),

    #[error("ファイル読み込みに失敗しました: {0}")]
    FileReadError(String),

    #[error("Excel 解析に失敗しました: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析に失敗しました: {0}")]
    CsvParseError(String),

    // ===== 表结构错误 =====
    #[error("ヘッダー行（{0}）が見つかりませんでした。")]
    HeaderNotFound(String),

    #[error("未知のシフト枠です: {0}")]
    UnknownShiftSlot(String),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
