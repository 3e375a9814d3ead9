//! Custom Query Module
//! Two-operand arithmetic over user-selected record keys.

use super::value::Computed;
use crate::data::RecordStore;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Label used in the operator picker.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Add => "+ (Addition)",
            Operator::Sub => "- (Subtraction)",
            Operator::Mul => "* (Multiplication)",
            Operator::Div => "/ (Division)",
        }
    }

    /// Apply to two integers. `+ - *` stay integral unless they overflow,
    /// `/` always produces a real number and is not guarded against zero.
    pub fn apply(self, a: i64, b: i64) -> Computed {
        let (checked, real) = match self {
            Operator::Add => (a.checked_add(b), a as f64 + b as f64),
            Operator::Sub => (a.checked_sub(b), a as f64 - b as f64),
            Operator::Mul => (a.checked_mul(b), a as f64 * b as f64),
            Operator::Div => return Computed::Real(a as f64 / b as f64),
        };
        checked.map_or(Computed::Real(real), Computed::Integer)
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A calculator request as selected in the interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomQuery {
    pub first: String,
    pub second: String,
    pub operator: String,
}

impl CustomQuery {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            operator: operator.into(),
        }
    }

    /// Evaluate against a store snapshot.
    ///
    /// Empty selections, missing or zero operands and unknown operators all
    /// give `Unavailable`.
    pub fn compute(&self, store: &RecordStore) -> Computed {
        if self.first.is_empty() || self.second.is_empty() {
            return Computed::Unavailable;
        }
        let (Some(a), Some(b)) = (store.operand(&self.first), store.operand(&self.second)) else {
            return Computed::Unavailable;
        };
        match self.operator.parse::<Operator>() {
            Ok(op) => op.apply(a, b),
            Err(e) => {
                log::warn!("{e}");
                Computed::Unavailable
            }
        }
    }

    /// Formula text, `?` standing in for an unselected key.
    pub fn formula(&self) -> String {
        let side = |s: &str| if s.is_empty() { "?".to_string() } else { s.to_string() };
        format!("{} {} {}", side(&self.first), self.operator, side(&self.second))
    }
}
