// ==========================================
// フロア配置システム - 排班时间段解析
// ==========================================
// 格式: "06:00 15:00" / "22:00 +08:00"（+ 表示次日）
// ==========================================

use crate::domain::types::ShiftSlot;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// 一行排班的工作时间段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start_minutes: u32,
    pub end_minutes: u32, // 次日时已加 24h
    pub start_text: String,
    pub end_text: String,
}

impl TimeRange {
    /// 与班次至少重叠 1 分钟
    pub fn overlaps(&self, slot: ShiftSlot) -> bool {
        slot.overlaps(self.start_minutes, self.end_minutes)
    }
}

/// 解析时间单元格
///
/// 在文本中查找 "HH:MM" 空白 "[+]HH:MM"，找不到返回 None
pub fn parse_time_range(text: &str) -> Option<TimeRange> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    tokens.windows(2).find_map(|pair| {
        let start = trailing_clock(pair[0])?;
        let (next_day, end_token) = match pair[1].strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, pair[1]),
        };
        let end = leading_clock(end_token)?;

        let start_minutes = start.0 * 60 + start.1;
        let mut end_minutes = end.0 * 60 + end.1;
        if next_day {
            end_minutes += MINUTES_PER_DAY;
        }

        Some(TimeRange {
            start_minutes,
            end_minutes,
            start_text: format!("{:02}:{:02}", start.0, start.1),
            end_text: format!("{:02}:{:02}", end.0, end.1),
        })
    })
}

// "HH:MM" 五个字符 → (时, 分)
fn clock(s: &str) -> Option<(u32, u32)> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let digits = |part: &[u8]| -> Option<u32> {
        if part.iter().all(u8::is_ascii_digit) {
            Some(part.iter().fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
        } else {
            None
        }
    };
    Some((digits(&bytes[..2])?, digits(&bytes[3..])?))
}

fn trailing_clock(token: &str) -> Option<(u32, u32)> {
    let start = token.len().checked_sub(5)?;
    token.get(start..).and_then(clock)
}

fn leading_clock(token: &str) -> Option<(u32, u32)> {
    token.get(..5).and_then(clock)
}
