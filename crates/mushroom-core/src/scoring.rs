//! Request-level scoring: resolve, validate, extract, classify.
//!
//! Feature extraction only ever sees a [`ValidatedInput`], which can only be
//! built when all four columns are present and valid.

use thiserror::Error;

use crate::features::{extract, FeatureVector};
use crate::resolver::{resolve, RawInput};
use crate::tree::classify;
use crate::types::{Classification, Column, InvalidValue};
use crate::validity;

/// Input rejected before classification.
///
/// Carries every problem found so they can be reported together. The
/// `Display` text is the response body clients receive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render_report(.missing, .invalid))]
pub struct ScoreError {
    /// Required columns absent from the request
    pub missing: Vec<Column>,

    /// Present columns holding values outside their permitted codes
    pub invalid: Vec<InvalidValue>,
}

impl ScoreError {
    /// True when the request decoded to nothing usable.
    pub fn is_all_missing(&self) -> bool {
        self.missing.len() == Column::ALL.len()
    }
}

fn render_report(missing: &[Column], invalid: &[InvalidValue]) -> String {
    let mut report = String::new();

    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(Column::as_str).collect();
        report.push_str("Not all columns were specified for model. Missing columns: \n\t");
        report.push_str(&names.join("\n\t"));
        report.push('\n');
    }

    if !invalid.is_empty() {
        report.push_str("Input is invalid:");
        for entry in invalid {
            report.push_str(&format!(
                "\n    \"{}\" is not a valid value for \"{}\"",
                entry.value, entry.column
            ));
        }
    }

    report
}

/// All four columns, present and valid.
///
/// Values are kept exactly as sent; only the validity check trims them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub odor: String,
    pub stalk_root: String,
    pub stalk_surface_below_ring: String,
    pub spore_print_color: String,
}

impl ValidatedInput {
    pub fn features(&self) -> FeatureVector {
        extract(
            &self.odor,
            &self.stalk_root,
            &self.stalk_surface_below_ring,
            &self.spore_print_color,
        )
    }
}

/// Resolve and validate a payload without classifying it.
pub fn validate(input: &RawInput) -> Result<ValidatedInput, ScoreError> {
    let (resolved, missing) = resolve(input, &Column::ALL);
    let validity = validity::check(&resolved);

    match (
        resolved.get(Column::Odor),
        resolved.get(Column::StalkRoot),
        resolved.get(Column::StalkSurfaceBelowRing),
        resolved.get(Column::SporePrintColor),
    ) {
        (Some(odor), Some(stalk_root), Some(surface), Some(spore)) if validity.all_valid() => {
            Ok(ValidatedInput {
                odor: odor.to_string(),
                stalk_root: stalk_root.to_string(),
                stalk_surface_below_ring: surface.to_string(),
                spore_print_color: spore.to_string(),
            })
        }
        _ => Err(ScoreError {
            missing,
            invalid: validity.into_invalid_values(),
        }),
    }
}

/// Score a decoded payload.
pub fn score(input: &RawInput) -> Result<Classification, ScoreError> {
    let validated = validate(input)?;
    let features = validated.features();
    let classification = Classification::from(classify(&features));

    tracing::debug!(
        features = ?features.bits(),
        classification = %classification,
        "Scored input"
    );

    Ok(classification)
}

/// Score a raw request body. Malformed bodies report every column missing.
pub fn score_body(body: &[u8]) -> Result<Classification, ScoreError> {
    score(&RawInput::from_body(body))
}
