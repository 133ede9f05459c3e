// ==========================================
// フロア配置システム - 资格规范化
// ==========================================
// 职责: 自由输入的资格文本 → 9 个规范类别之一
// 红线: 纯函数、总是成功；无法识别时原样(去首尾空白)返回
// ==========================================
// 匹配规则按顺序评估，先命中者胜出。
// サブチーフ 包含 チーフ，因此副主管规则必须排在主管之前。
// ==========================================

use crate::domain::types::License;

// ==========================================
// LicenseRule - 单条匹配规则
// ==========================================
#[derive(Debug)]
pub struct LicenseRule {
    pub license: License,
    /// 折叠后的文本包含任一片段即命中
    pub contains: &'static [&'static str],
    /// 折叠后的文本与任一项完全相同即命中
    pub exact: &'static [&'static str],
}

impl LicenseRule {
    pub fn matches(&self, folded: &str) -> bool {
        self.contains.iter().any(|token| folded.contains(token))
            || self.exact.iter().any(|token| folded == *token)
    }
}

/// 有序规则表
pub static LICENSE_RULES: [LicenseRule; 9] = [
    LicenseRule {
        license: License::SubChief,
        contains: &["sub", "サブチ", "ｻﾌﾞ", "サブ", "さぶ", "副"],
        exact: &[],
    },
    LicenseRule {
        license: License::Chief,
        contains: &["chief", "チーフ", "ﾁｰﾌ", "ちーふ"],
        exact: &[],
    },
    LicenseRule {
        license: License::Training,
        contains: &["training", "トレーニング", "ﾄﾚｰﾆﾝｸﾞ", "とれーにんぐ"],
        exact: &["トレ", "ﾄﾚ", "とれ"],
    },
    LicenseRule {
        license: License::Welcome,
        contains: &["welcome", "ウェルカム", "ｳｪﾙｶﾑ", "うぇるかむ", "ウェルカ", "we"],
        exact: &[],
    },
    LicenseRule {
        license: License::Basic,
        contains: &["basic", "ベーシック", "ﾍﾞｰｼｯｸ", "べーしっく", "ベーシ"],
        exact: &[],
    },
    LicenseRule {
        license: License::Trainee,
        contains: &["trainee", "トレーニー", "ﾄﾚｰﾆｰ", "とれーにー"],
        exact: &[],
    },
    LicenseRule {
        license: License::Trainee2,
        contains: &["kenshu", "研修", "けんしゅう"],
        exact: &[],
    },
    LicenseRule {
        license: License::Help,
        contains: &["help", "ヘルプ", "ﾍﾙﾌﾟ", "へるぷ"],
        exact: &[],
    },
    LicenseRule {
        license: License::Timee,
        contains: &["timee", "タイミー", "ﾀｲﾐｰ", "たいみー"],
        exact: &[],
    },
];

// ==========================================
// LicenseNormalizer - 纯函数工具类
// ==========================================
pub struct LicenseNormalizer;

impl LicenseNormalizer {
    /// 规范化资格文本
    ///
    /// # 规则
    /// 1. 去除所有空白（含全角空格）
    /// 2. 全角英数 → 半角，英文转小写
    /// 3. 按 LICENSE_RULES 顺序匹配，先命中者胜出
    /// 4. 未命中 → Unrecognized(去首尾空白的原文)
    pub fn normalize(raw: &str) -> License {
        let folded = Self::fold(raw);
        LICENSE_RULES
            .iter()
            .find(|rule| rule.matches(&folded))
            .map(|rule| rule.license.clone())
            .unwrap_or_else(|| License::Unrecognized(raw.trim().to_string()))
    }

    /// 折叠输入文本用于匹配
    pub fn fold(raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::narrow_ascii)
            .flat_map(char::to_lowercase)
            .collect()
    }

    pub fn rules() -> &'static [LicenseRule] {
        &LICENSE_RULES
    }

    // 全角 ASCII (U+FF01..U+FF5E) → 半角
    fn narrow_ascii(c: char) -> char {
        match c {
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
            _ => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        assert_eq!(LicenseNormalizer::fold("  Sub Chief "), "subchief");
        assert_eq!(LicenseNormalizer::fold("ＣＨＩＥＦ"), "chief");
        assert_eq!(LicenseNormalizer::fold("ウェル\u{3000}カム"), "ウェルカム");
    }

    #[test]
    fn test_sub_chief_before_chief() {
        assert_eq!(LicenseNormalizer::normalize("サブチーフ"), License::SubChief);
        assert_eq!(LicenseNormalizer::normalize("ｻﾌﾞﾁｰﾌ"), License::SubChief);
        assert_eq!(LicenseNormalizer::normalize("SubChief"), License::SubChief);
        assert_eq!(LicenseNormalizer::normalize("副主任"), License::SubChief);
        assert_eq!(LicenseNormalizer::normalize("チーフ"), License::Chief);
        assert_eq!(LicenseNormalizer::normalize("chief"), License::Chief);
    }

    #[test]
    fn test_training_vs_trainee() {
        assert_eq!(LicenseNormalizer::normalize("トレーニング"), License::Training);
        assert_eq!(LicenseNormalizer::normalize("とれ"), License::Training);
        assert_eq!(LicenseNormalizer::normalize("トレーニー"), License::Trainee);
        assert_eq!(LicenseNormalizer::normalize("Trainee"), License::Trainee);
        // トレ 只做完全匹配
        assert_eq!(
            LicenseNormalizer::normalize("トレx"),
            License::Unrecognized("トレx".to_string())
        );
    }

    #[test]
    fn test_unrecognized_passthrough() {
        assert_eq!(
            LicenseNormalizer::normalize("  Foo Bar "),
            License::Unrecognized("Foo Bar".to_string())
        );
        assert_eq!(
            LicenseNormalizer::normalize(""),
            License::Unrecognized(String::new())
        );
        assert_eq!(
            LicenseNormalizer::normalize("未設定"),
            License::Unrecognized("未設定".to_string())
        );
    }

    #[test]
    fn test_canonical_text_round_trip() {
        for license in License::CANONICAL.iter() {
            assert_eq!(
                &LicenseNormalizer::normalize(license.canonical_text()),
                license,
                "canonical text {} should map back to itself",
                license
            );
        }
    }

    #[test]
    fn test_no_rule_captures_other_canonical_token() {
        for license in License::CANONICAL.iter() {
            let folded = LicenseNormalizer::fold(license.canonical_text());
            let first = LicenseNormalizer::rules()
                .iter()
                .find(|rule| rule.matches(&folded))
                .map(|rule| &rule.license);
            assert_eq!(first, Some(license));
        }
    }
}
