//! Permitted category codes for each required column.
//!
//! Codes follow the UCI mushroom dataset legend:
//!
//! - odor: almond=a, anise=l, creosote=c, fishy=y, foul=f, musty=m, none=n,
//!   pungent=p, spicy=s
//! - stalk-root: bulbous=b, club=c, cup=u, equal=e, rhizomorphs=z, rooted=r,
//!   missing=?
//! - stalk-surface-below-ring: fibrous=f, scaly=y, silky=k, smooth=s
//! - spore-print-color: black=k, brown=n, buff=b, chocolate=h, green=r,
//!   orange=o, purple=u, white=w, yellow=y

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::resolver::ResolvedColumns;
use crate::types::{Column, InvalidValue};

lazy_static! {
    /// Column -> permitted codes. Matching is exact and case-sensitive.
    pub static ref VALIDITY_MAP: HashMap<Column, &'static [&'static str]> = {
        let mut map: HashMap<Column, &'static [&'static str]> = HashMap::new();
        map.insert(Column::Odor, &["a", "l", "c", "y", "f", "m", "n", "p", "s"]);
        map.insert(Column::StalkRoot, &["b", "c", "u", "e", "z", "r", "?"]);
        map.insert(Column::StalkSurfaceBelowRing, &["f", "y", "k", "s"]);
        map.insert(Column::SporePrintColor, &["k", "n", "b", "h", "r", "o", "u", "w", "y"]);
        map
    };
}

impl Column {
    /// Codes this column accepts.
    pub fn permitted_codes(&self) -> &'static [&'static str] {
        VALIDITY_MAP.get(self).copied().unwrap_or(&[])
    }

    /// Check a raw value against this column's codes after trimming.
    pub fn accepts(&self, raw_value: &str) -> bool {
        let value = raw_value.trim();
        self.permitted_codes().iter().any(|code| *code == value)
    }
}

/// Check whether `raw_value` is a permitted code for the column named
/// `attribute_name`. Unknown attribute names are never valid.
pub fn is_valid(attribute_name: &str, raw_value: &str) -> bool {
    attribute_name
        .parse::<Column>()
        .map(|column| column.accepts(raw_value))
        .unwrap_or(false)
}

/// Per-column validity of a resolved request, in resolution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityResult {
    entries: Vec<(Column, bool)>,
    invalid: Vec<InvalidValue>,
}

impl ValidityResult {
    /// Whether every resolved column holds a permitted code.
    pub fn all_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Validity flag for a column, or `None` if it was not resolved.
    pub fn get(&self, column: Column) -> Option<bool> {
        self.entries
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, valid)| *valid)
    }

    pub fn entries(&self) -> &[(Column, bool)] {
        &self.entries
    }

    /// Columns that failed, with their trimmed values.
    pub fn invalid_values(&self) -> &[InvalidValue] {
        &self.invalid
    }

    pub fn into_invalid_values(self) -> Vec<InvalidValue> {
        self.invalid
    }
}

/// Apply the validity map to every resolved column.
pub fn check(resolved: &ResolvedColumns) -> ValidityResult {
    let mut entries = Vec::with_capacity(resolved.len());
    let mut invalid = Vec::new();

    for (column, raw) in resolved.iter() {
        let valid = column.accepts(raw);
        if !valid {
            invalid.push(InvalidValue {
                column,
                value: raw.trim().to_string(),
            });
        }
        entries.push((column, valid));
    }

    ValidityResult { entries, invalid }
}
