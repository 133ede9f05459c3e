// ==========================================
// フロア配置システム - 领域类型定义
// ==========================================
// 职责: 资格(ライセンス)分类 / 楼层类型 / 班次时段
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 资格类别 (License)
// ==========================================
// 红线: 9 个规范类别 + Unrecognized(原文)
// Unrecognized 不满足任何指定资格配额，只能经由"任意资格"补位
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    Chief,                // チーフ
    SubChief,             // サブチーフ
    Training,             // トレーニング
    Welcome,              // ウェルカム
    Basic,                // ベーシック
    Trainee,              // トレーニー
    Trainee2,             // 研修生 (kenshu)
    Help,                 // ヘルプ
    Timee,                // タイミー
    Unrecognized(String), // 未识别，保留原文
}

impl License {
    /// 全部规范类别（按登记表单的选项顺序）
    pub const CANONICAL: [License; 9] = [
        License::Chief,
        License::SubChief,
        License::Training,
        License::Welcome,
        License::Basic,
        License::Trainee,
        License::Trainee2,
        License::Help,
        License::Timee,
    ];

    /// 未指定资格时的默认类别文本
    pub const BASELINE_TEXT: &'static str = "ベーシック";

    /// 规范显示文本（全角片假名）；Unrecognized 返回原文
    pub fn canonical_text(&self) -> &str {
        match self {
            License::Chief => "チーフ",
            License::SubChief => "サブチーフ",
            License::Training => "トレーニング",
            License::Welcome => "ウェルカム",
            License::Basic => "ベーシック",
            License::Trainee => "トレーニー",
            License::Trainee2 => "研修生",
            License::Help => "ヘルプ",
            License::Timee => "タイミー",
            License::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, License::Unrecognized(_))
    }

    /// 研修生不计入楼层定员（仍显示在配置名单中）
    pub fn counts_toward_headcount(&self) -> bool {
        !matches!(self, License::Trainee2)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_text())
    }
}

// ==========================================
// 楼层类型 (Floor Kind)
// ==========================================
// ENTRANCE: 1F，无角色配额，ウェルカム 优先 + 任意补位
// SERVICE: 2F~5F，按角色配额 → 余位填充
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorKind {
    Entrance,
    Service,
}

impl Default for FloorKind {
    fn default() -> Self {
        FloorKind::Service
    }
}

impl fmt::Display for FloorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorKind::Entrance => write!(f, "ENTRANCE"),
            FloorKind::Service => write!(f, "SERVICE"),
        }
    }
}

// ==========================================
// 班次时段 (Shift Slot)
// ==========================================
// 早班 06:00-14:00 / 晚班 14:00-23:00
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftSlot {
    #[serde(rename = "06-14")]
    Early,
    #[serde(rename = "14-23")]
    Late,
}

impl ShiftSlot {
    /// 时段起点（自 0 点起的分钟数）
    pub fn start_minutes(&self) -> u32 {
        match self {
            ShiftSlot::Early => 6 * 60,
            ShiftSlot::Late => 14 * 60,
        }
    }

    /// 时段终点（自 0 点起的分钟数）
    pub fn end_minutes(&self) -> u32 {
        match self {
            ShiftSlot::Early => 14 * 60,
            ShiftSlot::Late => 23 * 60,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ShiftSlot::Early => "06-14",
            ShiftSlot::Late => "14-23",
        }
    }

    /// 勤务区间与时段重叠 1 分钟以上即视为出勤
    pub fn overlaps(&self, start_minutes: u32, end_minutes: u32) -> bool {
        end_minutes > self.start_minutes() && start_minutes < self.end_minutes()
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ShiftSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "06-14" => Ok(ShiftSlot::Early),
            "14-23" => Ok(ShiftSlot::Late),
            other => Err(other.to_string()),
        }
    }
}
