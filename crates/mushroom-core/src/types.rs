//! Core types shared across the scoring pipeline.

use std::fmt;
use std::str::FromStr;

/// One of the four categorical attributes the classifier needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Odor,
    StalkRoot,
    StalkSurfaceBelowRing,
    SporePrintColor,
}

impl Column {
    /// The required columns, in the order they are resolved and reported.
    pub const ALL: [Column; 4] = [
        Column::Odor,
        Column::StalkRoot,
        Column::StalkSurfaceBelowRing,
        Column::SporePrintColor,
    ];

    /// Wire name of the column as it appears in request payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Odor => "odor",
            Column::StalkRoot => "stalk_root",
            Column::StalkSurfaceBelowRing => "stalk_surface_below_ring",
            Column::SporePrintColor => "spore_print_color",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a required column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// A present column whose value is not one of its permitted codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    pub column: Column,

    /// The value after whitespace trimming
    pub value: String,
}

/// Outcome of the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The input matches the target class
    Positive,
    Negative,
}

impl Classification {
    pub fn is_positive(&self) -> bool {
        matches!(self, Classification::Positive)
    }

    /// Response body for this outcome: `"1"` or `"0"`.
    pub fn as_body(&self) -> &'static str {
        match self {
            Classification::Positive => "1",
            Classification::Negative => "0",
        }
    }
}

impl From<bool> for Classification {
    fn from(positive: bool) -> Self {
        if positive {
            Classification::Positive
        } else {
            Classification::Negative
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_body())
    }
}
