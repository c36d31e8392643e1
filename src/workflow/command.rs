//! 交互命令解析

use regex::Regex;
use std::sync::OnceLock;

/// 会话命令，每条对应页面上的一次点击
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Subjects,
    Pick(Vec<String>),
    Questions,
    Answer { id: u8, response: String },
    Ask,
    Status,
    Submit,
    Help,
    Quit,
    Empty,
}

fn answer_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^answer\s+(\d+)\s+(\S+)\s*$").expect("answer pattern is a valid regex")
    })
}

impl Command {
    /// 解析一行输入，失败时返回给用户看的提示
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Empty),
            "subjects" => Ok(Command::Subjects),
            "questions" => Ok(Command::Questions),
            "ask" => Ok(Command::Ask),
            "status" => Ok(Command::Status),
            "submit" => Ok(Command::Submit),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "pick" => {
                let tokens: Vec<String> = rest
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
                if tokens.is_empty() {
                    Err("Usage: pick <number|name>[, <number|name> ...]".to_string())
                } else {
                    Ok(Command::Pick(tokens))
                }
            }
            "answer" => {
                let caps = answer_pattern()
                    .captures(line)
                    .ok_or_else(|| "Usage: answer <question id> <y|n>".to_string())?;
                let id = caps[1]
                    .parse::<u8>()
                    .map_err(|_| format!("Unknown question id {}", &caps[1]))?;
                Ok(Command::Answer {
                    id,
                    response: caps[2].to_string(),
                })
            }
            other => Err(format!("Unknown command '{}'. Type 'help' for commands.", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("  SUBMIT "), Ok(Command::Submit));
        assert_eq!(Command::parse(""), Ok(Command::Empty));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_pick() {
        assert_eq!(
            Command::parse("pick 7, physics ,Further Mathematics"),
            Ok(Command::Pick(vec![
                "7".into(),
                "physics".into(),
                "Further Mathematics".into()
            ]))
        );
        assert!(Command::parse("pick").is_err());
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(
            Command::parse("answer 12 y"),
            Ok(Command::Answer {
                id: 12,
                response: "y".into()
            })
        );
        assert!(Command::parse("answer twelve y").is_err());
        assert!(Command::parse("answer 999 y").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(Command::parse("dance").unwrap_err().contains("dance"));
    }
}
