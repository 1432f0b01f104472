use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// One-operand operator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOperator {
    Not,
}

/// Two-operand operator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    And,
    Or,
}

pub const NOT: UnaryOperator = UnaryOperator::Not;
pub const AND: BinaryOperator = BinaryOperator::And;
pub const OR: BinaryOperator = BinaryOperator::Or;

impl UnaryOperator {
    pub fn apply(self, value: bool) -> bool {
        match self {
            UnaryOperator::Not => !value,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
        }
    }
}

impl BinaryOperator {
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOperator::And => lhs && rhs,
            BinaryOperator::Or => lhs || rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Numeric tags follow declaration order.
impl TryFrom<u8> for UnaryOperator {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(UnaryOperator::Not),
            _ => Err(Error::InvalidOperator(format!("unary tag {}", tag))),
        }
    }
}

impl TryFrom<u8> for BinaryOperator {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(BinaryOperator::And),
            1 => Ok(BinaryOperator::Or),
            _ => Err(Error::InvalidOperator(format!("binary tag {}", tag))),
        }
    }
}

impl FromStr for UnaryOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "!" | "NOT" => Ok(UnaryOperator::Not),
            other => Err(Error::InvalidOperator(other.to_string())),
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "&&" | "AND" => Ok(BinaryOperator::And),
            "||" | "OR" => Ok(BinaryOperator::Or),
            other => Err(Error::InvalidOperator(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert!(NOT.apply(false));
        assert!(!NOT.apply(true));

        for &a in &[false, true] {
            for &b in &[false, true] {
                assert_eq!(AND.apply(a, b), a && b);
                assert_eq!(OR.apply(a, b), a || b);
            }
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(NOT.to_string(), "!");
        assert_eq!(AND.to_string(), "&&");
        assert_eq!(OR.to_string(), "||");
    }

    #[test]
    fn test_numeric_tags() {
        assert_eq!(UnaryOperator::try_from(0), Ok(NOT));
        assert_eq!(BinaryOperator::try_from(0), Ok(AND));
        assert_eq!(BinaryOperator::try_from(1), Ok(OR));
        assert!(matches!(
            UnaryOperator::try_from(1),
            Err(Error::InvalidOperator(_))
        ));
        assert!(matches!(
            BinaryOperator::try_from(2),
            Err(Error::InvalidOperator(_))
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!("!".parse::<UnaryOperator>(), Ok(NOT));
        assert_eq!("NOT".parse::<UnaryOperator>(), Ok(NOT));
        assert_eq!("&&".parse::<BinaryOperator>(), Ok(AND));
        assert_eq!(" || ".parse::<BinaryOperator>(), Ok(OR));
        assert_eq!(
            "^".parse::<BinaryOperator>(),
            Err(Error::InvalidOperator("^".to_string()))
        );
        assert!("~".parse::<UnaryOperator>().is_err());
    }
}
