// ==========================================
// フロア配置システム - 员工/排班导入器
// ==========================================
// 职责: 整合导入流程，从文件到内存中的员工名单
// 流程: 解析 → 映射 → 清洗 → 去重(upsert)
// ==========================================

use crate::domain::staff::{DailyShift, DailyShiftImport, RosterImport, SkippedRow, Staff};
use crate::domain::types::ShiftSlot;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::shift_parser::parse_time_range;
use crate::importer::staff_importer_trait::{DataCleaner, FieldMapper, FileParser};
use crate::importer::{DataCleanerImpl, StaffFieldMapper};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// 资格列缺失时的占位文本（规范化后为 Unrecognized）
pub const UNSET_LICENSE: &str = "未設定";

// 日次排班表的表头列
const SHIFT_TIME_HEADER: &str = "シフト時間帯";
const SHIFT_EMPLOYEE_ID_HEADER: &str = "社員番号";
const SHIFT_NAME_HEADER: &str = "氏名";

// 表头下一行为副表头，实际数据从表头 +2 行开始
const SHIFT_DATA_OFFSET: usize = 2;

// ==========================================
// StaffImporter - 导入器
// ==========================================
pub struct StaffImporter {
    // 花名册用解析器（第一张工作表）
    roster_parser: Box<dyn FileParser>,
    // 日次排班表用解析器（第二张工作表，不存在时第一张）
    shift_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    data_cleaner: Box<dyn DataCleaner>,
}

impl StaffImporter {
    pub fn new(
        roster_parser: Box<dyn FileParser>,
        shift_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        data_cleaner: Box<dyn DataCleaner>,
    ) -> Self {
        Self {
            roster_parser,
            shift_parser,
            field_mapper,
            data_cleaner,
        }
    }

    /// 从花名册文件导入员工
    ///
    /// # 规则
    /// - 无姓名的行跳过并记入 skipped_rows
    /// - 无 ID 时生成临时 ID `TMP-<batch>-<row>`
    /// - 同一 ID 重复出现时，后出现的行更新姓名/资格，顺序按首次出现
    /// - 有开始或结束时刻的行生成 DailyShift（日期不合法时取导入当日）
    #[instrument(skip(self, file_path), fields(batch_id))]
    pub fn import_roster(&self, file_path: &Path) -> ImportResult<RosterImport> {
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());
        info!(file_path = %file_path.display(), "开始导入花名册");

        // === 步骤 1: 解析文件 ===
        let raw_rows = self.roster_parser.parse_to_raw_records(file_path)?;
        debug!(total_rows = raw_rows.len(), "文件解析完成");

        let today = Local::now().date_naive();
        let mut staff: Vec<Staff> = Vec::new();
        let mut index_by_id: HashMap<String, usize> = HashMap::new();
        let mut shifts = Vec::new();
        let mut skipped_rows = Vec::new();

        for (idx, row) in raw_rows.iter().enumerate() {
            // === 步骤 2: 字段映射 ===
            let record = self.field_mapper.map_to_raw_staff(row, idx + 1);

            // === 步骤 3: 清洗 ===
            let name = match self.data_cleaner.normalize_null(record.employee_name) {
                Some(name) => name,
                None => {
                    debug!(row_number = record.row_number, "氏名が空のため行をスキップ");
                    skipped_rows.push(SkippedRow {
                        row_number: record.row_number,
                        reason: "氏名が空です".to_string(),
                    });
                    continue;
                }
            };

            let id = self
                .data_cleaner
                .normalize_null(record.employee_id)
                .unwrap_or_else(|| format!("TMP-{}-{}", batch_id, record.row_number));
            let license = self
                .data_cleaner
                .normalize_null(record.license)
                .unwrap_or_else(|| UNSET_LICENSE.to_string());

            // === 步骤 4: upsert ===
            match index_by_id.get(&id) {
                Some(&pos) => {
                    staff[pos].name = name.clone();
                    staff[pos].license = license;
                }
                None => {
                    index_by_id.insert(id.clone(), staff.len());
                    staff.push(Staff::new(id.clone(), name.clone(), license));
                }
            }

            let start = self.data_cleaner.to_hhmm(record.start_time);
            let end = self.data_cleaner.to_hhmm(record.end_time);
            if start.is_some() || end.is_some() {
                let date = self
                    .data_cleaner
                    .parse_work_date(record.work_date.as_deref())
                    .unwrap_or(today);
                shifts.push(DailyShift {
                    employee_id: Some(id),
                    staff_name: name,
                    date,
                    shift_slot: None,
                    start_time: start.unwrap_or_default(),
                    end_time: end.unwrap_or_default(),
                });
            }
        }

        if !skipped_rows.is_empty() {
            warn!(skipped = skipped_rows.len(), "一部の行をスキップしました");
        }
        info!(
            staff_count = staff.len(),
            shift_count = shifts.len(),
            "花名册导入完成"
        );

        Ok(RosterImport {
            batch_id,
            staff,
            shifts,
            skipped_rows,
        })
    }

    /// 从日次排班表导入指定日期、班次的出勤者
    ///
    /// # 规则
    /// - 表头行需同时含 シフト時間帯 / 社員番号 / 氏名
    /// - 数据从表头下两行开始
    /// - 无姓名或时间无法解析的行跳过
    /// - 与班次重叠 1 分钟以上的行保留
    #[instrument(skip(self, file_path))]
    pub fn import_daily_shift(
        &self,
        file_path: &Path,
        date: NaiveDate,
        shift_slot: ShiftSlot,
    ) -> ImportResult<DailyShiftImport> {
        info!(file_path = %file_path.display(), "开始导入日次排班表");

        let grid = self.shift_parser.parse_to_grid(file_path)?;

        let header_index = grid
            .iter()
            .position(|row| {
                [SHIFT_TIME_HEADER, SHIFT_EMPLOYEE_ID_HEADER, SHIFT_NAME_HEADER]
                    .iter()
                    .all(|h| row.iter().any(|cell| cell == h))
            })
            .ok_or_else(|| {
                ImportError::HeaderNotFound(format!(
                    "{}・{}・{}",
                    SHIFT_TIME_HEADER, SHIFT_EMPLOYEE_ID_HEADER, SHIFT_NAME_HEADER
                ))
            })?;

        let header = &grid[header_index];
        let column = |name: &str| header.iter().position(|cell| cell == name);
        // 表头检索已保证三列存在
        let (time_col, id_col, name_col) = match (
            column(SHIFT_TIME_HEADER),
            column(SHIFT_EMPLOYEE_ID_HEADER),
            column(SHIFT_NAME_HEADER),
        ) {
            (Some(t), Some(i), Some(n)) => (t, i, n),
            _ => {
                return Err(ImportError::HeaderNotFound(SHIFT_TIME_HEADER.to_string()));
            }
        };

        let cell = |row: &[String], col: usize| -> Option<String> {
            self.data_cleaner.normalize_null(row.get(col).cloned())
        };

        let mut shifts = Vec::new();
        for row in grid.iter().skip(header_index + SHIFT_DATA_OFFSET) {
            let row = row.as_slice();
            let (name, time_text) = match (cell(row, name_col), cell(row, time_col)) {
                (Some(name), Some(time_text)) => (name, time_text),
                _ => continue,
            };

            let Some(range) = parse_time_range(&time_text) else {
                debug!(staff_name = %name, time = %time_text, "时间段无法解析，跳过");
                continue;
            };

            if !range.overlaps(shift_slot) {
                continue;
            }

            shifts.push(DailyShift {
                employee_id: cell(row, id_col),
                staff_name: name,
                date,
                shift_slot: Some(shift_slot),
                start_time: range.start_text,
                end_time: range.end_text,
            });
        }

        info!(imported = shifts.len(), "出勤スタッフを読み込みました");

        Ok(DailyShiftImport {
            date,
            shift_slot,
            shifts,
        })
    }
}

impl Default for StaffImporter {
    fn default() -> Self {
        Self::new(
            Box::new(UniversalFileParser::new()),
            Box::new(UniversalFileParser::with_excel_sheet(1)),
            Box::new(StaffFieldMapper),
            Box::new(DataCleanerImpl),
        )
    }
}

/// 班次文本 → ShiftSlot
pub fn parse_shift_slot(text: &str) -> ImportResult<ShiftSlot> {
    text.parse::<ShiftSlot>().map_err(ImportError::UnknownShiftSlot)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 用内存网格代替文件
    struct GridParser(Vec<Vec<&'static str>>);

    impl FileParser for GridParser {
        fn parse_to_grid(&self, _file_path: &Path) -> ImportResult<Vec<Vec<String>>> {
            Ok(self
                .0
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect())
        }
    }

    fn importer(roster: Vec<Vec<&'static str>>, shift: Vec<Vec<&'static str>>) -> StaffImporter {
        StaffImporter::new(
            Box::new(GridParser(roster)),
            Box::new(GridParser(shift)),
            Box::new(StaffFieldMapper),
            Box::new(DataCleanerImpl),
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_import_roster_upsert_and_skip() {
        let importer = importer(
            vec![
                vec!["社員ID", "氏名", "ライセンス", "日付", "出勤", "退勤"],
                vec!["E001", "山田", "チーフ", "2026-10-19", "930", "18:00"],
                vec!["E002", "", "ベーシック", "", "", ""],
                vec!["", "佐藤", "", "", "", ""],
                vec!["E001", "山田太郎", "サブチーフ", "", "", ""],
            ],
            vec![],
        );

        let result = importer.import_roster(Path::new("roster.csv")).unwrap();

        assert_eq!(result.staff.len(), 2);
        assert_eq!(result.staff[0].id, "E001");
        assert_eq!(result.staff[0].name, "山田太郎");
        assert_eq!(result.staff[0].license, "サブチーフ");
        assert!(result.staff[1].id.starts_with("TMP-"));
        // 临时 ID 的行号与 skipped_rows 一致（数据行，从 1 开始）
        assert!(result.staff[1].id.ends_with("-3"));
        assert_eq!(result.staff[1].license, UNSET_LICENSE);

        assert_eq!(result.skipped_rows.len(), 1);
        assert_eq!(result.skipped_rows[0].row_number, 2);

        assert_eq!(result.shifts.len(), 1);
        assert_eq!(result.shifts[0].start_time, "09:30");
        assert_eq!(result.shifts[0].end_time, "18:00");
        assert_eq!(result.shifts[0].date, date());
    }

    #[test]
    fn test_import_daily_shift_filters_by_slot() {
        let importer = importer(
            vec![],
            vec![
                vec!["【日次シフト（ライン別）】"],
                vec!["シフト時間帯", "社員番号", "氏名"],
                vec!["", "", "（小計）"],
                vec!["06:00 15:00", "E001", "山田"],
                vec!["14:00 23:00", "E002", "佐藤"],
                vec!["22:00 +08:00", "", "鈴木"],
                vec!["休み", "E003", "田中"],
                vec!["06:00 15:00", "E004", ""],
            ],
        );

        let early = importer
            .import_daily_shift(Path::new("shift.xlsx"), date(), ShiftSlot::Early)
            .unwrap();
        let names: Vec<&str> = early.shifts.iter().map(|s| s.staff_name.as_str()).collect();
        assert_eq!(names, vec!["山田"]);

        let late = importer
            .import_daily_shift(Path::new("shift.xlsx"), date(), ShiftSlot::Late)
            .unwrap();
        let names: Vec<&str> = late.shifts.iter().map(|s| s.staff_name.as_str()).collect();
        assert_eq!(names, vec!["山田", "佐藤", "鈴木"]);
        assert_eq!(late.shifts[2].employee_id, None);
        assert_eq!(late.shifts[2].end_time, "08:00");
    }

    #[test]
    fn test_import_daily_shift_header_not_found() {
        let importer = importer(vec![], vec![vec!["氏名", "時間"], vec!["山田", "06:00 15:00"]]);

        let result = importer.import_daily_shift(Path::new("shift.xlsx"), date(), ShiftSlot::Early);
        assert!(matches!(result, Err(ImportError::HeaderNotFound(_))));
    }

    #[test]
    fn test_parse_shift_slot() {
        assert_eq!(parse_shift_slot("06-14").unwrap(), ShiftSlot::Early);
        assert!(matches!(
            parse_shift_slot("23-06"),
            Err(ImportError::UnknownShiftSlot(s)) if s == "23-06"
        ));
    }
}
