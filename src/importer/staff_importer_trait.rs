// ==========================================
// フロア配置システム - 员工导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 流程: 解析 → 映射 → 清洗
// ==========================================

use crate::domain::staff::RawStaffRecord;
use crate::importer::error::ImportResult;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为单元格网格（行 × 列，已去首尾空白）
    fn parse_to_grid(&self, file_path: &Path) -> ImportResult<Vec<Vec<String>>>;

    /// 解析文件为原始行记录（HashMap<列名, 值>）
    ///
    /// # 规则
    /// - 第一行为表头
    /// - 完全空白的行跳过
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        let mut rows = self.parse_to_grid(file_path)?.into_iter();
        let headers = match rows.next() {
            Some(h) => h,
            None => return Ok(Vec::new()),
        };

        let records = rows
            .filter(|row| row.iter().any(|v| !v.is_empty()))
            .map(|row| {
                headers
                    .iter()
                    .cloned()
                    .zip(row.into_iter())
                    .collect::<HashMap<String, String>>()
            })
            .collect();

        Ok(records)
    }
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 1）
// 实现者: StaffFieldMapper
pub trait FieldMapper: Send + Sync {
    /// 将原始行记录映射为 RawStaffRecord
    ///
    /// # 参数
    /// - row: 原始行记录（HashMap<列名, 值>）
    /// - row_number: 行号（数据行，从 1 开始）
    fn map_to_raw_staff(&self, row: &HashMap<String, String>, row_number: usize) -> RawStaffRecord;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 2）
// 实现者: DataCleaner
pub trait DataCleaner: Send + Sync {
    /// 标准化 NULL 值（空字符串/空白 → None）
    fn normalize_null(&self, value: Option<String>) -> Option<String>;

    /// 时刻文本 → HH:MM；无法识别的文本原样返回
    fn to_hhmm(&self, value: Option<String>) -> Option<String>;

    /// 日期文本（YYYY-MM-DD）→ NaiveDate；格式不符返回 None
    fn parse_work_date(&self, value: Option<&str>) -> Option<NaiveDate>;
}
