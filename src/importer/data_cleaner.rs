// ==========================================
// フロア配置システム - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 时刻 HH:MM 化 / 日期解析
// ==========================================

use crate::importer::staff_importer_trait::DataCleaner as DataCleanerTrait;
use chrono::NaiveDate;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 时刻标准化
    ///
    /// # 规则
    /// - 1~4 位纯数字: 左补零到 4 位 → "0930" → "09:30"
    /// - "H:M" / "H：M" / "H"（时、分各 1~2 位）: 各自补零
    /// - 其他文本原样返回
    fn to_hhmm(&self, value: Option<String>) -> Option<String> {
        let s = self.normalize_null(value)?;

        if s.len() <= 4 && s.chars().all(|c| c.is_ascii_digit()) {
            let padded = format!("{:0>4}", s);
            return Some(format!("{}:{}", &padded[..2], &padded[2..]));
        }

        Some(Self::split_hour_minute(&s).unwrap_or(s))
    }

    fn parse_work_date(&self, value: Option<&str>) -> Option<NaiveDate> {
        let value = value?.trim();
        // 只接受 YYYY-MM-DD
        if value.len() != 10 {
            return None;
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    }
}

impl DataCleaner {
    // "9:5" / "09：30" → 补零后的 HH:MM
    fn split_hour_minute(s: &str) -> Option<String> {
        let (hour, minute) = match s.find(|c: char| c == ':' || c == '：') {
            Some(pos) => {
                let sep_len = s[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
                (&s[..pos], Some(&s[pos + sep_len..]))
            }
            None => (s, None),
        };

        let is_part = |p: &str| (1..=2).contains(&p.len()) && p.chars().all(|c| c.is_ascii_digit());
        if !is_part(hour) {
            return None;
        }

        let minute = match minute {
            Some(m) if m.is_empty() => "00",
            Some(m) if is_part(m) => m,
            Some(_) => return None,
            None => "00",
        };

        Some(format!("{:0>2}:{:0>2}", hour, minute))
    }
}
