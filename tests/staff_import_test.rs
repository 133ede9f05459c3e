// ==========================================
// StaffImporter 集成测试
// ==========================================
// 测试目标: 文件 → 导入 → 出勤者 → 自动配置 的完整流程
// ==========================================

mod helpers;

use chrono::NaiveDate;
use floor_staffing::importer::{ImportError, UNSET_LICENSE};
use floor_staffing::{logging, FloorAssignmentEngine, ShiftSlot, StaffImporter};
use helpers::fixture_files::{write_csv, write_temp};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn test_roster_csv_to_assignment() {
    logging::init_test();

    let file = write_csv(&[
        "社員ID,氏名,スキル,勤務日,出勤,退勤",
        "E001,山田,チーフ,2026-10-19,600,1500",
        "E002,佐藤,ｻﾌﾞﾁｰﾌ,,,",
        "E003,鈴木,トレーニング,,,",
        "E004,田中,ウェルカム,,,",
        "E005,高橋,ウェルカム,,,",
        ",伊藤,,,,",
        "E006,,ベーシック,,,",
    ]);

    let roster = StaffImporter::default().import_roster(file.path()).unwrap();

    assert_eq!(roster.staff.len(), 6);
    assert_eq!(roster.skipped_rows.len(), 1);
    assert_eq!(roster.staff[5].name, "伊藤");
    assert_eq!(roster.staff[5].license, UNSET_LICENSE);
    assert_eq!(roster.shifts.len(), 1);
    assert_eq!(roster.shifts[0].start_time, "06:00");
    assert_eq!(roster.shifts[0].date, date());

    let result = FloorAssignmentEngine::new().assign(&roster.staff);
    let floor2: Vec<&str> = result
        .floor(2)
        .unwrap()
        .members
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(floor2, vec!["E001", "E002", "E003", "E004", "E005"]);
    // 未設定 的员工只能在 1F 任意补位
    assert_eq!(result.floor(1).unwrap().members[0].name, "伊藤");
}

#[test]
fn test_roster_duplicate_id_upsert() {
    let file = write_csv(&[
        "employee_id,employee_name,license",
        "E001,山田,ベーシック",
        "E002,佐藤,ヘルプ",
        "E001,山田太郎,チーフ",
    ]);

    let roster = StaffImporter::default().import_roster(file.path()).unwrap();

    assert_eq!(roster.staff.len(), 2);
    assert_eq!(roster.staff[0].id, "E001");
    assert_eq!(roster.staff[0].name, "山田太郎");
    assert_eq!(roster.staff[0].license, "チーフ");
}

#[test]
fn test_daily_shift_csv_to_attending_staff() {
    let roster_file = write_csv(&[
        "社員番号,氏名,ライセンス",
        "E001,山田,チーフ",
        "E002,佐藤,ウェルカム",
        "E003,鈴木,ベーシック",
    ]);
    let shift_file = write_csv(&[
        "【日次シフト（ライン別）】,,",
        "シフト時間帯,社員番号,氏名",
        ",,（ライン）",
        "06:00 15:00,E003,鈴木",
        "14:00 23:00,E001,山田",
        "22:00 +08:00,,佐藤",
        "09:00 18:00,E099,新人",
    ]);

    let importer = StaffImporter::default();
    let roster = importer.import_roster(roster_file.path()).unwrap();
    let shift = importer
        .import_daily_shift(shift_file.path(), date(), ShiftSlot::Early)
        .unwrap();

    assert_eq!(shift.shifts.len(), 2);
    assert!(shift.shifts.iter().all(|s| s.shift_slot == Some(ShiftSlot::Early)));

    let attending = shift.attending_staff(&roster.staff);
    let ids: Vec<&str> = attending.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["E003", "E099"]);
    assert_eq!(attending[1].license, "");

    let late = importer
        .import_daily_shift(shift_file.path(), date(), ShiftSlot::Late)
        .unwrap();
    let attending = late.attending_staff(&roster.staff);
    let names: Vec<&str> = attending.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["鈴木", "山田", "佐藤", "新人"]);
    // 按姓名匹配的 佐藤 沿用花名册中的资格
    assert_eq!(attending[2].license, "ウェルカム");
}

#[test]
fn test_daily_shift_without_header() {
    let shift_file = write_csv(&["氏名,時間", "山田,06:00 15:00"]);

    let result = StaffImporter::default().import_daily_shift(
        shift_file.path(),
        date(),
        ShiftSlot::Early,
    );

    assert!(matches!(result, Err(ImportError::HeaderNotFound(_))));
}

#[test]
fn test_unsupported_roster_format() {
    let file = write_temp(".txt", &["氏名", "山田"]);

    let result = StaffImporter::default().import_roster(file.path());

    assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
}
