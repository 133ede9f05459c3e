// ==========================================
// フロア配置システム - 配置层
// ==========================================
// 职责: 楼层定员表覆写（JSON）与运行环境配置
// ==========================================

pub mod app_config;
pub mod error;
pub mod plan_loader;

pub use app_config::{config_keys, validate_locale, AppConfig, DEFAULT_LOCALE, SUPPORTED_LOCALES};
pub use error::{ConfigError, ConfigResult};
pub use plan_loader::{load_floor_plan, parse_floor_plan, FloorPlanDocument};
