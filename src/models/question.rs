use std::fmt;

/// 兴趣题数量
pub const QUESTION_COUNT: u8 = 30;

/// 30 道兴趣题（题号 -> 题干）
pub static INTEREST_QUESTIONS: phf::Map<u8, &'static str> = phf::phf_map! {
    1u8 => "Do you enjoy solving problems and thinking logically?",
    2u8 => "Do you like helping people with their health or emotions?",
    3u8 => "Do you enjoy teaching, mentoring, or guiding others?",
    4u8 => "Would you like to start or manage a business?",
    5u8 => "Are you interested in working with machines, electronics, or fixing things?",
    6u8 => "Do you enjoy creating art, music, or visual designs?",
    7u8 => "Are you interested in writing, reading, or telling stories?",
    8u8 => "Do you want to travel and explore new cultures?",
    9u8 => "Are you passionate about justice, laws, or human rights?",
    10u8 => "Would you like to work with money, budgeting, or finance?",
    11u8 => "Do you enjoy working outdoors or with nature?",
    12u8 => "Do you want to help improve your community or country?",
    13u8 => "Do you like managing people, schedules, or resources?",
    14u8 => "Are you interested in understanding how the human body works?",
    15u8 => "Do you enjoy building or designing physical structures?",
    16u8 => "Would you like to protect others and enforce rules?",
    17u8 => "Are you passionate about computers, coding, or software?",
    18u8 => "Do you want to make discoveries in science or research?",
    19u8 => "Are you interested in the economy, trade, or entrepreneurship?",
    20u8 => "Do you enjoy using social media or creating online content?",
    21u8 => "Would you like to work with animals?",
    22u8 => "Are you interested in fashion, beauty, or personal care?",
    23u8 => "Do you like helping people with personal issues?",
    24u8 => "Do you enjoy working with numbers and patterns?",
    25u8 => "Would you like to work in the media or entertainment industry?",
    26u8 => "Are you passionate about the environment and sustainability?",
    27u8 => "Do you enjoy making or fixing electronic gadgets?",
    28u8 => "Do you want to help children learn and grow?",
    29u8 => "Would you like to explore space or aviation?",
    30u8 => "Are you interested in using AI or robotics to solve problems?",
};

/// 单道兴趣题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u8,
    pub prompt: &'static str,
}

impl Question {
    /// 按题号查找
    pub fn get(id: u8) -> Option<Self> {
        INTEREST_QUESTIONS
            .get(&id)
            .map(|prompt| Question { id, prompt: *prompt })
    }

    /// 按题号顺序返回全部题目
    pub fn all() -> impl Iterator<Item = Question> {
        (1..=QUESTION_COUNT).filter_map(Question::get)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.prompt)
    }
}

/// 是/否回答，线上格式为 1/0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterestResponse {
    Yes,
    No,
}

impl InterestResponse {
    /// 线上取值
    pub fn value(self) -> u8 {
        match self {
            InterestResponse::Yes => 1,
            InterestResponse::No => 0,
        }
    }

    /// 从 0/1 解析
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(InterestResponse::Yes),
            0 => Some(InterestResponse::No),
            _ => None,
        }
    }

    /// 从用户输入解析（y/yes/1, n/no/0）
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "1" => Some(InterestResponse::Yes),
            "n" | "no" | "0" => Some(InterestResponse::No),
            _ => None,
        }
    }
}

impl fmt::Display for InterestResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterestResponse::Yes => write!(f, "Yes"),
            InterestResponse::No => write!(f, "No"),
        }
    }
}
