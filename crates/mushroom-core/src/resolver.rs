//! Column resolution from raw request payloads.

use serde_json::{Map, Value};

use crate::types::Column;

/// A request payload decoded into a JSON object.
///
/// Anything that is not a JSON object (absent body, malformed JSON, arrays,
/// scalars) decodes to the empty mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    fields: Map<String, Value>,
}

impl RawInput {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a request body.
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            tracing::debug!("Empty request body, treating as empty mapping");
            return Self::empty();
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                tracing::debug!(error = %e, "Malformed JSON body, treating as empty mapping");
                Self::empty()
            }
        }
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            other => {
                tracing::debug!(kind = json_kind(&other), "Non-object JSON body, treating as empty mapping");
                Self::empty()
            }
        }
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Required columns present in a request, in required order.
///
/// Values are kept as sent; trimming happens at validity checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedColumns {
    values: Vec<(Column, String)>,
}

impl ResolvedColumns {
    pub fn get(&self, column: Column) -> Option<&str> {
        self.values
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &str)> + '_ {
        self.values.iter().map(|(c, v)| (*c, v.as_str()))
    }

    pub fn columns(&self) -> Vec<Column> {
        self.values.iter().map(|(c, _)| *c).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Pick the `required` columns out of `input`.
///
/// Returns the present columns in `required` order alongside the columns
/// that were absent. Keys outside `required` are ignored. String values are
/// copied verbatim; any other JSON value is carried as its compact JSON text
/// so that it fails validity checking instead of disappearing.
pub fn resolve(input: &RawInput, required: &[Column]) -> (ResolvedColumns, Vec<Column>) {
    let mut values = Vec::with_capacity(required.len());
    let mut missing = Vec::new();

    for &column in required {
        match input.get(column.as_str()) {
            Some(Value::String(s)) => values.push((column, s.clone())),
            Some(other) => values.push((column, other.to_string())),
            None => missing.push(column),
        }
    }

    (ResolvedColumns { values }, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_resolve_all_present() {
        let input = RawInput::from_value(json!({
            "spore_print_color": "r",
            "odor": "n",
            "stalk_surface_below_ring": "y",
            "stalk_root": "c"
        }));
        let (resolved, missing) = resolve(&input, &Column::ALL);

        assert!(missing.is_empty());
        assert_eq!(resolved.columns(), Column::ALL.to_vec());
        assert_eq!(resolved.get(Column::Odor), Some("n"));
    }

    #[test]
    fn test_resolve_reports_missing() {
        let input = RawInput::from_value(json!({ "odor": "n" }));
        let (resolved, missing) = resolve(&input, &Column::ALL);

        assert_eq!(resolved.len(), 1);
        assert_eq!(
            missing,
            vec![
                Column::StalkRoot,
                Column::StalkSurfaceBelowRing,
                Column::SporePrintColor
            ]
        );
    }

    #[test]
    fn test_resolve_ignores_extra_keys() {
        let input = RawInput::from_value(json!({
            "odor": "n",
            "cap_shape": "x",
            "habitat": "g"
        }));
        let (resolved, _) = resolve(&input, &Column::ALL);
        assert_eq!(resolved.columns(), vec![Column::Odor]);
    }

    #[test]
    fn test_values_copied_verbatim() {
        let input = RawInput::from_value(json!({ "odor": "  n\t" }));
        let (resolved, _) = resolve(&input, &Column::ALL);
        assert_eq!(resolved.get(Column::Odor), Some("  n\t"));
    }

    #[test]
    fn test_non_string_values_carried_as_json_text() {
        let input = RawInput::from_value(json!({ "odor": 5, "stalk_root": null }));
        let (resolved, missing) = resolve(&input, &Column::ALL);
        assert_eq!(resolved.get(Column::Odor), Some("5"));
        assert_eq!(resolved.get(Column::StalkRoot), Some("null"));
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn test_resolve_subset_of_required() {
        let input = RawInput::from_value(json!({ "odor": "n", "stalk_root": "c" }));
        let (resolved, missing) = resolve(&input, &[Column::StalkRoot]);
        assert_eq!(resolved.columns(), vec![Column::StalkRoot]);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_malformed_bodies_are_empty() {
        let bodies: [&[u8]; 7] = [b"", b"   ", b"{", b"not json", b"[1, 2]", b"\"odor\"", b"null"];
        for body in bodies {
            let input = RawInput::from_body(body);
            assert!(input.is_empty(), "body {:?} should decode empty", body);
            let (resolved, missing) = resolve(&input, &Column::ALL);
            assert!(resolved.is_empty());
            assert_eq!(missing, Column::ALL.to_vec());
        }
    }

    #[test]
    fn test_from_body_object() {
        let input = RawInput::from_body(br#"{"odor": "a", "extra": 1}"#);
        assert_eq!(input.len(), 2);
        assert_eq!(input.get("odor"), Some(&json!("a")));
    }

    proptest! {
        #[test]
        fn prop_missing_count_matches_present(mask in 0u8..16, extra in "[a-z_]{1,12}") {
            let mut fields = Map::new();
            for (i, column) in Column::ALL.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    fields.insert(column.as_str().to_string(), json!("n"));
                }
            }
            if extra.parse::<Column>().is_err() {
                fields.insert(extra, json!("x"));
            }

            let present = mask.count_ones() as usize;
            let (resolved, missing) = resolve(&RawInput::from_map(fields), &Column::ALL);

            prop_assert_eq!(resolved.len(), present);
            prop_assert_eq!(missing.len(), 4 - present);
            for column in resolved.columns() {
                prop_assert!(!missing.contains(&column));
            }
        }
    }
}
