// ==========================================
// フロア配置システム - 楼层领域模型
// ==========================================
// 职责: 楼层定员表 / 配置结果 / 警告
// 红线: 每个员工 ID 在一次配置中最多出现在一个楼层
// ==========================================

use crate::domain::staff::Staff;
use crate::domain::types::{FloorKind, License};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

// ==========================================
// FloorRequirement - 楼层定员
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRequirement {
    pub floor_id: u8,
    #[serde(default)]
    pub kind: FloorKind,
    pub total_slots: usize,

    // ===== 角色最低配额 =====
    #[serde(default)]
    pub chief_slots: usize,
    #[serde(default)]
    pub sub_chief_slots: usize,
    #[serde(default)]
    pub training_slots: usize,
    #[serde(default)]
    pub welcome_min_slots: usize,

    // 余位填充阶段可接收 トレーニー / 研修生
    #[serde(default)]
    pub accepts_trainees: bool,
}

impl FloorRequirement {
    /// 指定资格的最低配额；非配额资格返回 0
    pub fn role_quota(&self, license: &License) -> usize {
        match license {
            License::Chief => self.chief_slots,
            License::SubChief => self.sub_chief_slots,
            License::Training => self.training_slots,
            License::Welcome => self.welcome_min_slots,
            _ => 0,
        }
    }

    /// 角色配额合计
    pub fn quota_sum(&self) -> usize {
        self.chief_slots + self.sub_chief_slots + self.training_slots + self.welcome_min_slots
    }
}

/// 标准楼层定员表（1F~5F）
pub const STANDARD_FLOOR_REQUIREMENTS: [FloorRequirement; 5] = [
    FloorRequirement {
        floor_id: 1,
        kind: FloorKind::Entrance,
        total_slots: 4,
        chief_slots: 0,
        sub_chief_slots: 0,
        training_slots: 0,
        welcome_min_slots: 0,
        accepts_trainees: false,
    },
    FloorRequirement {
        floor_id: 2,
        kind: FloorKind::Service,
        total_slots: 12,
        chief_slots: 1,
        sub_chief_slots: 1,
        training_slots: 1,
        welcome_min_slots: 2,
        accepts_trainees: true,
    },
    FloorRequirement {
        floor_id: 3,
        kind: FloorKind::Service,
        total_slots: 12,
        chief_slots: 1,
        sub_chief_slots: 1,
        training_slots: 1,
        welcome_min_slots: 2,
        accepts_trainees: true,
    },
    FloorRequirement {
        floor_id: 4,
        kind: FloorKind::Service,
        total_slots: 10,
        chief_slots: 1,
        sub_chief_slots: 1,
        training_slots: 1,
        welcome_min_slots: 2,
        accepts_trainees: false,
    },
    FloorRequirement {
        floor_id: 5,
        kind: FloorKind::Service,
        total_slots: 10,
        chief_slots: 1,
        sub_chief_slots: 1,
        training_slots: 1,
        welcome_min_slots: 2,
        accepts_trainees: false,
    },
];

/// 楼层定员表校验错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FloorPlanError {
    #[error("フロア定義が空です")]
    Empty,

    #[error("フロア{0}が重複しています")]
    DuplicateFloor(u8),

    #[error("入口フロア(ENTRANCE)はちょうど1つ必要です（{0}件）")]
    EntranceCount(usize),

    #[error("入口フロア{0}にはロール枠を設定できません")]
    EntranceWithQuota(u8),

    #[error("フロア{floor_id}: ロール枠合計 {quota_sum} が総枠 {total_slots} を超えています")]
    QuotaExceedsTotal {
        floor_id: u8,
        quota_sum: usize,
        total_slots: usize,
    },
}

// ==========================================
// FloorPlan - 楼层定员表（有序）
// ==========================================
// 楼层顺序即结果顺序，也是各阶段的遍历顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorPlan {
    requirements: Vec<FloorRequirement>,
}

impl FloorPlan {
    /// 创建并校验定员表
    pub fn new(requirements: Vec<FloorRequirement>) -> Result<Self, FloorPlanError> {
        if requirements.is_empty() {
            return Err(FloorPlanError::Empty);
        }

        let mut seen = HashSet::new();
        for req in &requirements {
            if !seen.insert(req.floor_id) {
                return Err(FloorPlanError::DuplicateFloor(req.floor_id));
            }
            if req.quota_sum() > req.total_slots {
                return Err(FloorPlanError::QuotaExceedsTotal {
                    floor_id: req.floor_id,
                    quota_sum: req.quota_sum(),
                    total_slots: req.total_slots,
                });
            }
        }

        let entrances: Vec<&FloorRequirement> = requirements
            .iter()
            .filter(|r| r.kind == FloorKind::Entrance)
            .collect();
        if entrances.len() != 1 {
            return Err(FloorPlanError::EntranceCount(entrances.len()));
        }
        if entrances[0].quota_sum() > 0 {
            return Err(FloorPlanError::EntranceWithQuota(entrances[0].floor_id));
        }

        Ok(Self { requirements })
    }

    /// 标准定员表
    pub fn standard() -> Self {
        Self {
            requirements: STANDARD_FLOOR_REQUIREMENTS.to_vec(),
        }
    }

    pub fn requirements(&self) -> &[FloorRequirement] {
        &self.requirements
    }

    pub fn requirement(&self, floor_id: u8) -> Option<&FloorRequirement> {
        self.requirements.iter().find(|r| r.floor_id == floor_id)
    }

    /// 全楼层目标人数合计
    pub fn total_headcount(&self) -> usize {
        self.requirements.iter().map(|r| r.total_slots).sum()
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::standard()
    }
}

// ==========================================
// FloorAssignment - 单楼层配置结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorAssignment {
    pub floor_id: u8,
    pub members: Vec<Staff>, // 按填充顺序（角色优先级），非输入顺序
}

impl FloorAssignment {
    pub fn headcount(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, staff_id: &str) -> bool {
        self.members.iter().any(|m| m.id == staff_id)
    }
}

// ==========================================
// AssignmentWarning - 配置警告
// ==========================================
// 文案格式固定（日文），直接展示给用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentWarning {
    /// 角色配额不足
    RoleShortage {
        floor_id: u8,
        role: License,
        found: usize,
        required: usize,
    },
    /// 总人数不足
    HeadcountShortage {
        floor_id: u8,
        assigned: usize,
        required: usize,
    },
    /// 研修生已配置（不计入定员）
    Trainee2Placed,
}

impl fmt::Display for AssignmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentWarning::RoleShortage {
                floor_id,
                role,
                found,
                required,
            } => write!(f, "フロア{}: {}が不足（{}/{}）", floor_id, role, found, required),
            AssignmentWarning::HeadcountShortage {
                floor_id,
                assigned,
                required,
            } => write!(f, "フロア{}: 人数不足（{}/{}）", floor_id, assigned, required),
            AssignmentWarning::Trainee2Placed => write!(
                f,
                "研修生は人員数に含めない想定です（今回は配置リストに表示のみ）。"
            ),
        }
    }
}

// ==========================================
// AssignmentResult - 一次配置的完整结果
// ==========================================
// 每次调用新建，生成后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub floors: Vec<FloorAssignment>,
    pub warnings: Vec<String>,
}

impl AssignmentResult {
    pub fn floor(&self, floor_id: u8) -> Option<&FloorAssignment> {
        self.floors.iter().find(|f| f.floor_id == floor_id)
    }

    /// 已配置员工 ID（按楼层、填充顺序）
    pub fn assigned_ids(&self) -> Vec<&str> {
        self.floors
            .iter()
            .flat_map(|f| f.members.iter().map(|m| m.id.as_str()))
            .collect()
    }

    /// 未被配置的员工（仅供展示，不属于警告）
    pub fn unassigned<'a>(&self, staff: &'a [Staff]) -> Vec<&'a Staff> {
        let assigned: HashSet<&str> = self.assigned_ids().into_iter().collect();
        staff
            .iter()
            .filter(|s| !assigned.contains(s.id.as_str()))
            .collect()
    }
}
