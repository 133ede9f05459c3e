// ==========================================
// フロア配置システム - 引擎层
// ==========================================
// 职责: 资格规范化 + 楼层自动配置
// 红线: 无 I/O、无跨调用共享状态
// ==========================================

pub mod floor_assigner;
pub mod license_normalizer;

// 重导出核心引擎
pub use floor_assigner::FloorAssignmentEngine;
pub use license_normalizer::{LicenseNormalizer, LicenseRule, LICENSE_RULES};
