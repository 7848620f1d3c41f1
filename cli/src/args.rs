//! Argument value types

use forms_core::{ElementId, FormsError};
use std::str::FromStr;

/// `FROM:TO` list positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveArg {
    pub from: usize,
    pub to: usize,
}

impl FromStr for MoveArg {
    type Err = FormsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormsError::validation(format!("expected FROM:TO, got {s:?}"));
        let (from, to) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            from: from.trim().parse().map_err(|_| invalid())?,
            to: to.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// `ID=VALUE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerArg {
    pub id: ElementId,
    pub value: String,
}

impl FromStr for AnswerArg {
    type Err = FormsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, value) = s
            .split_once('=')
            .ok_or_else(|| FormsError::validation(format!("expected ID=VALUE, got {s:?}")))?;
        Ok(Self {
            id: id.parse()?,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!("2:0".parse::<MoveArg>().unwrap(), MoveArg { from: 2, to: 0 });
        assert!("2".parse::<MoveArg>().is_err());
        assert!("a:1".parse::<MoveArg>().is_err());
        assert!("1:-1".parse::<MoveArg>().is_err());
    }

    #[test]
    fn test_parse_answer() {
        let answer: AnswerArg = "101=Alice=Bob".parse().unwrap();
        assert_eq!(answer.id, ElementId::new(101));
        assert_eq!(answer.value, "Alice=Bob");

        let empty: AnswerArg = "5=".parse().unwrap();
        assert_eq!(empty.value, "");

        assert!("Alice".parse::<AnswerArg>().is_err());
        assert!("x=1".parse::<AnswerArg>().is_err());
    }
}
