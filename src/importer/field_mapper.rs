// ==========================================
// フロア配置システム - 字段映射器实现
// ==========================================
// 职责: 源列名(含别名) → RawStaffRecord
// ==========================================

use crate::domain::staff::RawStaffRecord;
use crate::importer::staff_importer_trait::FieldMapper as FieldMapperTrait;
use std::collections::HashMap;

// ===== 列名别名（按优先顺序） =====
const EMPLOYEE_ID_COLUMNS: &[&str] = &["employee_id", "社員ID", "社員番号"];
const EMPLOYEE_NAME_COLUMNS: &[&str] = &["employee_name", "氏名", "name", "名前"];
const LICENSE_COLUMNS: &[&str] = &["license", "ライセンス", "スキル"];
const WORK_DATE_COLUMNS: &[&str] = &["date", "日付", "勤務日"];
const START_TIME_COLUMNS: &[&str] = &["start_time", "開始", "勤務開始", "start", "出勤"];
const END_TIME_COLUMNS: &[&str] = &["end_time", "終了", "勤務終了", "end", "退勤"];

pub struct StaffFieldMapper;

impl FieldMapperTrait for StaffFieldMapper {
    fn map_to_raw_staff(&self, row: &HashMap<String, String>, row_number: usize) -> RawStaffRecord {
        RawStaffRecord {
            employee_id: self.get_string(row, EMPLOYEE_ID_COLUMNS),
            employee_name: self.get_string(row, EMPLOYEE_NAME_COLUMNS),
            license: self.get_string(row, LICENSE_COLUMNS),
            work_date: self.get_string(row, WORK_DATE_COLUMNS),
            start_time: self.get_string(row, START_TIME_COLUMNS),
            end_time: self.get_string(row, END_TIME_COLUMNS),
            row_number,
        }
    }
}

impl StaffFieldMapper {
    /// 按别名顺序取第一个非空值
    fn get_string(&self, row: &HashMap<String, String>, aliases: &[&str]) -> Option<String> {
        for alias in aliases {
            if let Some(value) = row.get(*alias) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_field_mapper_japanese_headers() {
        let record = StaffFieldMapper.map_to_raw_staff(
            &row(&[("社員ID", "E001"), ("氏名", "山田"), ("スキル", "チーフ"), ("出勤", "900")]),
            3,
        );

        assert_eq!(record.employee_id, Some("E001".to_string()));
        assert_eq!(record.employee_name, Some("山田".to_string()));
        assert_eq!(record.license, Some("チーフ".to_string()));
        assert_eq!(record.start_time, Some("900".to_string()));
        assert_eq!(record.end_time, None);
        assert_eq!(record.row_number, 3);
    }

    #[test]
    fn test_field_mapper_alias_priority() {
        // employee_name 为空时落到下一个别名
        let record = StaffFieldMapper.map_to_raw_staff(
            &row(&[("employee_name", "  "), ("名前", "佐藤"), ("name", "Sato")]),
            1,
        );
        assert_eq!(record.employee_name, Some("Sato".to_string()));
    }

    #[test]
    fn test_field_mapper_empty_as_none() {
        let record = StaffFieldMapper.map_to_raw_staff(&row(&[("氏名", "山田"), ("license", "")]), 1);
        assert_eq!(record.license, None);
        assert_eq!(record.employee_id, None);
    }
}
