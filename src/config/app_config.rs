// ==========================================
// フロア配置システム - 运行配置
// ==========================================
// 来源: 环境变量（CLI 参数可再覆写）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::plan_loader::load_floor_plan;
use crate::domain::floor::FloorPlan;
use std::path::PathBuf;

/// 配置键
pub mod config_keys {
    /// 定员表 JSON 路径（可选）
    pub const PLAN_PATH: &str = "FLOOR_STAFFING_PLAN";
    /// 报告语言（ja / en）
    pub const LOCALE: &str = "FLOOR_STAFFING_LOCALE";
}

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["ja", "en"];
pub const DEFAULT_LOCALE: &str = "ja";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub plan_path: Option<PathBuf>,
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plan_path: None,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AppConfig {
    /// 从进程环境变量读取
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取（空值视为未设置）
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let locale = match get(config_keys::LOCALE) {
            Some(locale) => validate_locale(&locale)?,
            None => DEFAULT_LOCALE.to_string(),
        };

        Ok(Self {
            plan_path: get(config_keys::PLAN_PATH).map(PathBuf::from),
            locale,
        })
    }

    /// 定员表：指定了路径则加载，否则为标准表
    pub fn floor_plan(&self) -> ConfigResult<FloorPlan> {
        match &self.plan_path {
            Some(path) => load_floor_plan(path),
            None => Ok(FloorPlan::standard()),
        }
    }
}

/// 校验语言代码
pub fn validate_locale(locale: &str) -> ConfigResult<String> {
    let locale = locale.trim();
    if SUPPORTED_LOCALES.contains(&locale) {
        Ok(locale.to_string())
    } else {
        Err(ConfigError::UnsupportedLocale(locale.to_string()))
    }
}
