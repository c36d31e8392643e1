/// 科目清单（表单勾选项），取值即提交给后端的字符串
pub const SUBJECT_CATALOGUE: &[&str] = &[
    "english",
    "french",
    "general paper",
    "religious studies",
    "philosophy",
    "logic",
    "mathematics",
    "further mathematics",
    "physics",
    "chemistry",
    "biology",
    "computer science",
    "ict",
    "geology",
    "technical drawing",
    "food science",
    "nutrition",
    "agricultural science",
    "physical education",
    "environmental management",
    "history",
    "geography",
    "literature",
    "education",
    "art",
    "music",
    "economics",
    "accounting",
    "business mathematics",
    "management",
    "law",
    "commerce",
];

/// 科目查找
pub struct Subject;

impl Subject {
    /// 按清单序号查找（从1开始）
    pub fn by_number(number: usize) -> Option<&'static str> {
        number
            .checked_sub(1)
            .and_then(|idx| SUBJECT_CATALOGUE.get(idx).copied())
    }

    /// 按名称查找（忽略大小写与首尾空白）
    pub fn find(name: &str) -> Option<&'static str> {
        let wanted = name.trim().to_lowercase();
        SUBJECT_CATALOGUE.iter().copied().find(|s| *s == wanted)
    }

    /// 解析一个勾选项：序号、清单中的名称，或自定义科目
    ///
    /// 清单外的名称原样保留，空串返回 None
    pub fn resolve(token: &str) -> Option<String> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if let Ok(number) = token.parse::<usize>() {
            return Self::by_number(number).map(str::to_string);
        }
        Some(
            Self::find(token)
                .map(str::to_string)
                .unwrap_or_else(|| token.to_string()),
        )
    }

    /// 两个科目是否视为同一项
    pub fn same(a: &str, b: &str) -> bool {
        a.trim().to_lowercase() == b.trim().to_lowercase()
    }
}
