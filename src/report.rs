// ==========================================
// フロア配置システム - 配置结果报告
// ==========================================
// 职责: AssignmentResult → 文本 / JSON
// 红线: 只读展示，不修改配置结果；未配置员工只展示，不算警告
// ==========================================

use crate::domain::floor::{AssignmentResult, FloorPlan};
use crate::domain::staff::Staff;
use crate::engine::LicenseNormalizer;
use crate::i18n::t_in;
use serde::Serialize;

// ==========================================
// AssignmentReport - 报告视图
// ==========================================
pub struct AssignmentReport<'a> {
    plan: &'a FloorPlan,
    result: &'a AssignmentResult,
    staff: &'a [Staff],
}

/// JSON 输出结构
#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    #[serde(flatten)]
    result: &'a AssignmentResult,
    unassigned: Vec<&'a Staff>,
}

impl<'a> AssignmentReport<'a> {
    /// # 参数
    /// - plan: 本次使用的定员表（提供各楼层目标人数）
    /// - result: 配置结果
    /// - staff: 配置输入的员工名单（用于列出未配置者）
    pub fn new(plan: &'a FloorPlan, result: &'a AssignmentResult, staff: &'a [Staff]) -> Self {
        Self {
            plan,
            result,
            staff,
        }
    }

    /// 渲染为文本
    pub fn render_text(&self, locale: &str) -> String {
        let mut lines = vec![t_in(locale, "report.title", &[])];

        for floor in &self.result.floors {
            let total = self
                .plan
                .requirement(floor.floor_id)
                .map(|r| r.total_slots)
                .unwrap_or_default();
            let floor_id = floor.floor_id.to_string();
            let count = floor.headcount().to_string();
            let total = total.to_string();
            lines.push(String::new());
            lines.push(t_in(
                locale,
                "report.floor_header",
                &[
                    ("floor", floor_id.as_str()),
                    ("count", count.as_str()),
                    ("total", total.as_str()),
                ],
            ));

            if floor.members.is_empty() {
                lines.push(t_in(locale, "report.empty_floor", &[]));
            }
            for member in &floor.members {
                lines.push(self.member_line(locale, member));
            }
        }

        lines.push(String::new());
        lines.push(t_in(locale, "report.warnings_header", &[]));
        if self.result.warnings.is_empty() {
            lines.push(t_in(locale, "report.no_warnings", &[]));
        }
        for warning in &self.result.warnings {
            lines.push(format!("  - {}", warning));
        }

        let unassigned = self.result.unassigned(self.staff);
        lines.push(String::new());
        lines.push(t_in(locale, "report.unassigned_header", &[]));
        if unassigned.is_empty() {
            lines.push(t_in(locale, "report.no_unassigned", &[]));
        }
        for staff in unassigned {
            lines.push(self.member_line(locale, staff));
        }

        lines.join("\n")
    }

    /// 渲染为 JSON（floors / warnings / unassigned）
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ReportDocument {
            result: self.result,
            unassigned: self.result.unassigned(self.staff),
        })
    }

    fn member_line(&self, locale: &str, staff: &Staff) -> String {
        let license = LicenseNormalizer::normalize(&staff.license);
        t_in(
            locale,
            "report.member_line",
            &[
                ("name", staff.name.as_str()),
                ("license", license.canonical_text()),
            ],
        )
    }
}
