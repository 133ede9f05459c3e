// ==========================================
// 测试数据构建器 - 员工名单
// ==========================================

use floor_staffing::Staff;

// ==========================================
// Staff 构建器
// ==========================================

pub struct StaffBuilder {
    id: String,
    name: Option<String>,
    license: String,
}

impl StaffBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            license: String::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn license(mut self, license: &str) -> Self {
        self.license = license.to_string();
        self
    }

    pub fn build(self) -> Staff {
        let name = self.name.unwrap_or_else(|| format!("スタッフ{}", self.id));
        Staff::new(self.id, name, self.license)
    }
}

/// (id, license) 列表 → 员工名单
pub fn roster(entries: &[(&str, &str)]) -> Vec<Staff> {
    entries
        .iter()
        .map(|(id, license)| StaffBuilder::new(id).license(license).build())
        .collect()
}

/// 同一资格的 n 名员工，ID 为 `<prefix>1..n`
pub fn many(prefix: &str, license: &str, n: usize) -> Vec<Staff> {
    (1..=n)
        .map(|i| {
            StaffBuilder::new(&format!("{}{}", prefix, i))
                .license(license)
                .build()
        })
        .collect()
}
