//! # mushroom-core
//!
//! Deterministic scoring of mushroom attribute payloads.
//!
//! A payload names four categorical attributes. Scoring runs in a fixed
//! pipeline:
//!
//! 1. **Resolve**: pick `odor`, `stalk_root`, `stalk_surface_below_ring` and
//!    `spore_print_color` out of the payload, noting which are absent
//! 2. **Validate**: check each value against its permitted category codes
//! 3. **Extract**: encode the four values as six binary features
//! 4. **Classify**: walk a fixed decision tree to a boolean
//!
//! Any missing or invalid column stops the pipeline before step 3 and every
//! problem is reported in one [`ScoreError`].
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Total**: Every payload, including malformed JSON, yields either a
//!    classification or a `ScoreError`
//! 3. **Stateless**: The only shared data are immutable lookup tables
//!
//! ## Example
//!
//! ```rust
//! use mushroom_core::{score_body, Classification};
//!
//! let body = br#"{"odor":"n","stalk_root":"c","stalk_surface_below_ring":"y","spore_print_color":"r"}"#;
//! assert_eq!(score_body(body), Ok(Classification::Positive));
//!
//! let err = score_body(br#"{"odor":"n"}"#).unwrap_err();
//! assert_eq!(err.missing.len(), 3);
//! ```

pub mod features;
pub mod resolver;
pub mod scoring;
pub mod tree;
pub mod types;
pub mod validity;

// Re-export main types at crate root
pub use features::{extract, FeatureVector};
pub use resolver::{resolve, RawInput, ResolvedColumns};
pub use scoring::{score, score_body, validate, ScoreError, ValidatedInput};
pub use tree::{classify, truth_table};
pub use types::{Classification, Column, InvalidValue, UnknownColumn};
pub use validity::{is_valid, ValidityResult};
