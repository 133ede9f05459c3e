// ==========================================
// フロア配置システム - 楼层定员表加载
// ==========================================
// 格式: {"floors":[{"floor_id":1,"kind":"ENTRANCE","total_slots":4,...}]}
// 红线: 加载后必须经过 FloorPlan::new 校验
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::floor::{FloorPlan, FloorRequirement};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// 定员表 JSON 文档
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlanDocument {
    pub floors: Vec<FloorRequirement>,
}

impl From<&FloorPlan> for FloorPlanDocument {
    fn from(plan: &FloorPlan) -> Self {
        Self {
            floors: plan.requirements().to_vec(),
        }
    }
}

/// 从 JSON 文本解析定员表
pub fn parse_floor_plan(json: &str) -> ConfigResult<FloorPlan> {
    let document: FloorPlanDocument = serde_json::from_str(json)?;
    debug!(floor_count = document.floors.len(), "フロア定義を解析しました");
    Ok(FloorPlan::new(document.floors)?)
}

/// 从文件加载定员表
pub fn load_floor_plan(path: &Path) -> ConfigResult<FloorPlan> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let plan = parse_floor_plan(&json)?;
    info!(path = %path.display(), total_headcount = plan.total_headcount(), "フロア定義を読み込みました");
    Ok(plan)
}
