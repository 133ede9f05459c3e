// ==========================================
// フロア配置システム - 楼层自动配置引擎
// ==========================================
// 红线: 同一员工 ID 最多配置到一个楼层
// 红线: 每个阶段都按原始名单顺序扫描，跳过已使用 ID（先到先得）
// ==========================================
// 职责: 员工名单 → 各楼层成员 + 警告
// 输入: 员工名单（不修改）
// 输出: AssignmentResult
// ==========================================
// 阶段顺序:
// 1) 服务楼层角色配额（チーフ → サブチーフ → トレーニング，每个角色遍历全部楼层后再换下一个）
// 2) 服务楼层 ウェルカム 最低人数
// 3) 入口楼层: ウェルカム 优先，不足时任意资格补位（研修生除外）
// 4) 服务楼层余位: ベーシック → ヘルプ → タイミー → (限指定楼层) トレーニー/研修生 → 任意
// 5) 总人数审计
// 6) 研修生已配置时追加通知
// ==========================================

use crate::domain::floor::{
    AssignmentResult, AssignmentWarning, FloorAssignment, FloorPlan, FloorRequirement,
};
use crate::domain::staff::Staff;
use crate::domain::types::{FloorKind, License};
use crate::engine::license_normalizer::LicenseNormalizer;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// 按楼层依次扫描的配额角色
const QUOTA_ROLES: [License; 3] = [License::Chief, License::SubChief, License::Training];

/// 余位填充的优先资格
const FILL_PRIORITY: [License; 3] = [License::Basic, License::Help, License::Timee];

/// 可接收楼层才会补入的培训类资格
const TRAINEE_PRIORITY: [License; 2] = [License::Trainee, License::Trainee2];

// ==========================================
// FloorAssignmentEngine - 楼层配置引擎
// ==========================================
// 无跨调用状态：used 集合与楼层成员只存在于单次 assign 内
#[derive(Debug, Clone, Default)]
pub struct FloorAssignmentEngine {
    plan: FloorPlan,
}

impl FloorAssignmentEngine {
    /// 使用标准定员表
    pub fn new() -> Self {
        Self::with_plan(FloorPlan::standard())
    }

    /// 使用指定定员表（测试或部署覆写）
    pub fn with_plan(plan: FloorPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行自动配置
    ///
    /// # 参数
    /// - `staff`: 员工名单（顺序即优先顺序）
    ///
    /// # 返回
    /// 各楼层成员（按定员表顺序）+ 警告；任何输入都不会失败
    #[instrument(skip(self, staff), fields(staff_count = staff.len(), floor_count = self.plan.requirements().len()))]
    pub fn assign(&self, staff: &[Staff]) -> AssignmentResult {
        let mut session = AssignmentSession::new(&self.plan, staff);

        session.fill_role_quotas();
        session.fill_welcome_minimums();
        session.fill_entrance_floor();
        session.fill_service_remainders();
        session.audit_headcount();
        session.note_trainee2_placement();

        let result = session.finish();
        info!(
            assigned = result.assigned_ids().len(),
            warnings = result.warnings.len(),
            "楼层配置完成"
        );
        result
    }
}

// ==========================================
// AssignmentSession - 单次配置会话
// ==========================================
struct AssignmentSession<'a> {
    plan: &'a FloorPlan,
    // 名单 + 规范化资格（计算视图，不回写 Staff）
    roster: Vec<(&'a Staff, License)>,
    used: HashSet<&'a str>,
    // 与 plan.requirements() 下标一一对应
    members: Vec<Vec<&'a Staff>>,
    warnings: Vec<AssignmentWarning>,
}

impl<'a> AssignmentSession<'a> {
    fn new(plan: &'a FloorPlan, staff: &'a [Staff]) -> Self {
        let roster = staff
            .iter()
            .map(|s| (s, LicenseNormalizer::normalize(&s.license)))
            .collect();

        Self {
            plan,
            roster,
            used: HashSet::new(),
            members: vec![Vec::new(); plan.requirements().len()],
            warnings: Vec::new(),
        }
    }

    // ==========================================
    // 阶段
    // ==========================================

    /// 阶段 1: 服务楼层角色配额
    fn fill_role_quotas(&mut self) {
        for role in QUOTA_ROLES.iter() {
            for idx in self.service_floors() {
                self.fill_quota(idx, role);
            }
        }
    }

    /// 阶段 2: 服务楼层 ウェルカム 最低人数
    fn fill_welcome_minimums(&mut self) {
        for idx in self.service_floors() {
            self.fill_quota(idx, &License::Welcome);
        }
    }

    /// 阶段 3: 入口楼层
    fn fill_entrance_floor(&mut self) {
        let Some(idx) = self
            .plan
            .requirements()
            .iter()
            .position(|r| r.kind == FloorKind::Entrance)
        else {
            return;
        };

        let welcomes = self.pick(idx, &License::Welcome, self.remaining(idx));
        let rest = self.fill_any(idx, self.remaining(idx), |l| *l != License::Trainee2);
        debug!(
            floor_id = self.requirement(idx).floor_id,
            welcomes, rest, "入口楼层填充"
        );
    }

    /// 阶段 4: 服务楼层余位
    fn fill_service_remainders(&mut self) {
        for idx in self.service_floors() {
            for license in FILL_PRIORITY.iter() {
                self.pick(idx, license, self.remaining(idx));
            }
            if self.requirement(idx).accepts_trainees {
                for license in TRAINEE_PRIORITY.iter() {
                    self.pick(idx, license, self.remaining(idx));
                }
            }
            self.fill_any(idx, self.remaining(idx), |_| true);
            debug!(
                floor_id = self.requirement(idx).floor_id,
                headcount = self.members[idx].len(),
                "服务楼层余位填充"
            );
        }
    }

    /// 阶段 5: 总人数审计（全部楼层，定员表顺序）
    fn audit_headcount(&mut self) {
        for idx in 0..self.members.len() {
            let req = *self.requirement(idx);
            let assigned = self.members[idx].len();
            if assigned < req.total_slots {
                self.push_warning(AssignmentWarning::HeadcountShortage {
                    floor_id: req.floor_id,
                    assigned,
                    required: req.total_slots,
                });
            }
        }
    }

    /// 阶段 6: 研修生配置通知
    fn note_trainee2_placement(&mut self) {
        let placed = self
            .roster
            .iter()
            .any(|(s, l)| *l == License::Trainee2 && self.used.contains(s.id.as_str()));
        if placed {
            self.push_warning(AssignmentWarning::Trainee2Placed);
        }
    }

    fn finish(self) -> AssignmentResult {
        let floors = self
            .plan
            .requirements()
            .iter()
            .zip(self.members)
            .map(|(req, members)| FloorAssignment {
                floor_id: req.floor_id,
                members: members.into_iter().cloned().collect(),
            })
            .collect();

        AssignmentResult {
            floors,
            warnings: self.warnings.iter().map(|w| w.to_string()).collect(),
        }
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 按配额选取指定资格，不足时记录角色缺口
    fn fill_quota(&mut self, idx: usize, role: &License) {
        let req = *self.requirement(idx);
        let required = req.role_quota(role);
        let found = self.pick(idx, role, required);
        if found < required {
            self.push_warning(AssignmentWarning::RoleShortage {
                floor_id: req.floor_id,
                role: role.clone(),
                found,
                required,
            });
        }
    }

    /// 选取至多 count 名未使用且资格一致的员工
    fn pick(&mut self, idx: usize, license: &License, count: usize) -> usize {
        self.take(idx, count, |l| l == license)
    }

    /// 选取至多 count 名未使用且满足过滤条件的员工（资格不限）
    fn fill_any<F>(&mut self, idx: usize, count: usize, filter: F) -> usize
    where
        F: Fn(&License) -> bool,
    {
        self.take(idx, count, filter)
    }

    fn take<F>(&mut self, idx: usize, count: usize, accept: F) -> usize
    where
        F: Fn(&License) -> bool,
    {
        let mut taken = 0;
        for (staff, license) in &self.roster {
            if taken >= count {
                break;
            }
            let staff: &'a Staff = *staff;
            if self.used.contains(staff.id.as_str()) || !accept(license) {
                continue;
            }
            self.used.insert(staff.id.as_str());
            self.members[idx].push(staff);
            taken += 1;
        }
        taken
    }

    fn remaining(&self, idx: usize) -> usize {
        self.requirement(idx)
            .total_slots
            .saturating_sub(self.members[idx].len())
    }

    fn requirement(&self, idx: usize) -> &FloorRequirement {
        &self.plan.requirements()[idx]
    }

    fn service_floors(&self) -> Vec<usize> {
        self.plan
            .requirements()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.kind == FloorKind::Service)
            .map(|(idx, _)| idx)
            .collect()
    }

    fn push_warning(&mut self, warning: AssignmentWarning) {
        warn!(warning = %warning, "配置不足");
        self.warnings.push(warning);
    }
}
