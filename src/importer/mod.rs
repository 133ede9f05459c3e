// ==========================================
// フロア配置システム - 导入层
// ==========================================
// 职责: 花名册/日次排班表 → 内存中的员工名单
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod shift_parser;
pub mod staff_importer;
pub mod staff_importer_trait;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::StaffFieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use shift_parser::{parse_time_range, TimeRange};
pub use staff_importer::{parse_shift_slot, StaffImporter, UNSET_LICENSE};

// 重导出 Trait 接口
pub use staff_importer_trait::{DataCleaner, FieldMapper, FileParser};
