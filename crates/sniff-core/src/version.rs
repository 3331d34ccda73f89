//! Version-range comparison.
//!
//! A range is an optional leading operator (`<`, `<=`, `>`, `>=`) followed by
//! a number. Only the first run of digits counts as the operand. A range with
//! no operator and no digits matches every version.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    /// First run of ASCII digits anywhere in the range
    static ref OPERAND: Regex = Regex::new(r"[0-9]+").unwrap();

    /// Operator token, only recognized at the very start
    static ref OPERATOR: Regex = Regex::new(r"^[<>]=?").unwrap();
}

/// Comparison operator of a version range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeOp {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl RangeOp {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "<" => Some(RangeOp::Lt),
            "<=" => Some(RangeOp::Le),
            ">" => Some(RangeOp::Gt),
            ">=" => Some(RangeOp::Ge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOp::Lt => "<",
            RangeOp::Le => "<=",
            RangeOp::Gt => ">",
            RangeOp::Ge => ">=",
        }
    }

    /// NaN on either side always yields false
    fn apply(self, version: f64, operand: f64) -> bool {
        match self {
            RangeOp::Lt => version < operand,
            RangeOp::Le => version <= operand,
            RangeOp::Gt => version > operand,
            RangeOp::Ge => version >= operand,
        }
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed version range.
///
/// Parsing never fails: anything that does not look like a range simply
/// loses its operator and/or operand, and a range with neither is a
/// wildcard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VersionRange {
    op: Option<RangeOp>,
    operand: Option<f64>,
}

impl VersionRange {
    /// Parse a range expression such as `">=40"`, `"7"` or `"junk"`
    pub fn parse(range: &str) -> Self {
        let op = OPERATOR
            .find(range)
            .and_then(|m| RangeOp::from_token(m.as_str()));
        let operand = OPERAND.find(range).map(|m| version_number(m.as_str()));

        Self { op, operand }
    }

    /// The range that matches every version
    pub fn wildcard() -> Self {
        Self { op: None, operand: None }
    }

    pub fn op(&self) -> Option<RangeOp> {
        self.op
    }

    pub fn operand(&self) -> Option<f64> {
        self.operand
    }

    pub fn is_wildcard(&self) -> bool {
        self.op.is_none() && self.operand.is_none()
    }

    /// Does `version` fall inside this range?
    pub fn contains(&self, version: f64) -> bool {
        match (self.op, self.operand) {
            (Some(op), Some(operand)) => op.apply(version, operand),
            // an operator against a missing operand compares against NaN
            (Some(_), None) => false,
            (None, Some(operand)) => version == operand,
            (None, None) => true,
        }
    }
}

impl Default for VersionRange {
    fn default() -> Self {
        Self::wildcard()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.op, self.operand) {
            (None, None) => f.write_str("*"),
            (op, operand) => {
                if let Some(op) = op {
                    write!(f, "{}", op)?;
                }
                if let Some(operand) = operand {
                    write!(f, "{}", operand)?;
                }
                Ok(())
            }
        }
    }
}

/// Compare `version` against a range expression
pub fn compare(version: f64, range: &str) -> bool {
    VersionRange::parse(range).contains(version)
}

/// Like [`compare`], with an absent range matching every version
pub fn matches(version: f64, range: Option<&str>) -> bool {
    range.map_or(true, |r| compare(version, r))
}

/// Numeric value of a captured digit run.
///
/// Digit runs too long for an integer still produce a (rounded) float
/// rather than an error.
pub fn version_number(digits: &str) -> f64 {
    digits.parse::<f64>().unwrap_or(f64::NAN)
}
