// ==========================================
// フロア配置システム - 员工领域模型
// ==========================================
// 红线: 资格原文不可变，规范化只是计算视图，不回写
// ==========================================

use crate::domain::types::{License, ShiftSlot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 员工登记错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StaffError {
    #[error("名前を入れてください")]
    EmptyName,
}

// ==========================================
// Staff - 员工
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,      // 单次运行内唯一
    pub name: String,    // 显示名，非空
    pub license: String, // 资格原文（按输入保留）
}

impl Staff {
    pub fn new(id: impl Into<String>, name: impl Into<String>, license: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            license: license.into(),
        }
    }

    /// 登记新员工
    ///
    /// # 规则
    /// - 名字去除首尾空白后不可为空
    /// - 资格缺省或空白时取 ベーシック
    /// - ID 由 UUID v4 生成
    pub fn register(name: &str, license: Option<&str>) -> Result<Self, StaffError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StaffError::EmptyName);
        }

        let license = license
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(License::BASELINE_TEXT);

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            license: license.to_string(),
        })
    }
}

// ==========================================
// DailyShift - 单日出勤记录
// ==========================================
// 来源: 花名册导入(开始/结束列) 或 日次排班表导入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyShift {
    pub employee_id: Option<String>,
    pub staff_name: String,
    pub date: NaiveDate,
    pub shift_slot: Option<ShiftSlot>,
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
}

// ==========================================
// RawStaffRecord - 导入中间结构
// ==========================================
// 字段映射后、清洗前的一行数据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStaffRecord {
    pub employee_id: Option<String>,
    pub employee_name: Option<String>,
    pub license: Option<String>,
    pub work_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub row_number: usize,
}

/// 被跳过的导入行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub row_number: usize,
    pub reason: String,
}

// ==========================================
// RosterImport - 花名册导入结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterImport {
    pub batch_id: String,
    pub staff: Vec<Staff>,        // 首次出现顺序，ID 去重
    pub shifts: Vec<DailyShift>,  // 含开始/结束时间的行
    pub skipped_rows: Vec<SkippedRow>,
}

// ==========================================
// DailyShiftImport - 日次排班表导入结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyShiftImport {
    pub date: NaiveDate,
    pub shift_slot: ShiftSlot,
    pub shifts: Vec<DailyShift>, // 表内顺序
}

impl DailyShiftImport {
    /// 出勤员工名单（作为自动配置的输入）
    ///
    /// # 规则
    /// - 先按员工 ID，再按姓名匹配花名册
    /// - 花名册中不存在的出勤者以空资格加入（规范化为 Unrecognized）
    /// - 表内顺序，每人最多一次
    pub fn attending_staff(&self, roster: &[Staff]) -> Vec<Staff> {
        let mut seen = std::collections::HashSet::new();
        let mut attending = Vec::new();

        for shift in &self.shifts {
            let matched = shift
                .employee_id
                .as_deref()
                .and_then(|id| roster.iter().find(|s| s.id == id))
                .or_else(|| roster.iter().find(|s| s.name == shift.staff_name));

            let staff = match matched {
                Some(s) => s.clone(),
                None => Staff::new(
                    shift
                        .employee_id
                        .clone()
                        .unwrap_or_else(|| format!("SHIFT-{}", shift.staff_name)),
                    shift.staff_name.clone(),
                    "",
                ),
            };

            if seen.insert(staff.id.clone()) {
                attending.push(staff);
            }
        }

        attending
    }
}
