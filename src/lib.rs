// ==========================================
// フロア配置システム - 核心库
// ==========================================
// 系统定位: 出勤员工 → 各楼层自动配置（人工最终确认）
// 技术栈: Rust + calamine/csv 导入 + tracing
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 资格规范化与楼层配置
pub mod engine;

// 导入层 - 花名册/日次排班表
pub mod importer;

// 配置层 - 定员表覆写与环境配置
pub mod config;

// 报告 - 文本/JSON 输出
pub mod report;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{FloorKind, License, ShiftSlot};

// 领域实体
pub use domain::{
    AssignmentResult, AssignmentWarning, DailyShift, DailyShiftImport, FloorAssignment, FloorPlan,
    FloorRequirement, RosterImport, Staff,
};

// 引擎
pub use engine::{FloorAssignmentEngine, LicenseNormalizer};

// 导入
pub use importer::{ImportError, StaffImporter};

// 配置
pub use config::{AppConfig, ConfigError};

// 报告
pub use report::AssignmentReport;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "フロア配置システム";
