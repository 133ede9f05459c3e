// ==========================================
// フロア配置システム - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、楼层定员表
// 红线: 不含引擎逻辑,不含文件解析
// ==========================================

pub mod floor;
pub mod staff;
pub mod types;

// 重导出核心类型
pub use floor::{
    AssignmentResult, AssignmentWarning, FloorAssignment, FloorPlan, FloorPlanError,
    FloorRequirement, STANDARD_FLOOR_REQUIREMENTS,
};
pub use staff::{
    DailyShift, DailyShiftImport, RawStaffRecord, RosterImport, SkippedRow, Staff, StaffError,
};
pub use types::{FloorKind, License, ShiftSlot};
