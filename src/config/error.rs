// ==========================================
// フロア配置システム - 配置层错误类型
// ==========================================

use crate::domain::floor::FloorPlanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ファイルを読み込めません: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("フロア定義の JSON が不正です: {0}")]
    Json(#[from] serde_json::Error),

    #[error("フロア定義が不正です: {0}")]
    InvalidPlan(#[from] FloorPlanError),

    #[error("未対応のロケールです: {0}（ja / en）")]
    UnsupportedLocale(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
