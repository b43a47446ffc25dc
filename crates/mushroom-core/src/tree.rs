//! Fixed decision tree over the six binary features.
//!
//! Every split compares one feature against 0.5, so each node is a plain
//! boolean test. The structure mirrors the trained model node for node,
//! including the `stalk_root_c` split under `odor_n` whose two leaves agree.

use crate::features::FeatureVector;

/// Classify a feature vector. `true` means the input is of the target class.
#[allow(
    clippy::collapsible_else_if,
    clippy::if_same_then_else,
    clippy::needless_bool
)]
pub fn classify(f: &FeatureVector) -> bool {
    if !f.odor_n {
        if !f.stalk_root_c {
            if !f.stalk_surface_below_ring_y {
                if !f.odor_a {
                    !f.odor_l
                } else {
                    false
                }
            } else {
                false
            }
        } else if !f.stalk_surface_below_ring_y {
            false
        } else {
            true
        }
    } else if !f.spore_print_color_r {
        if !f.stalk_surface_below_ring_y {
            false
        } else {
            if !f.stalk_root_c {
                true
            } else {
                true
            }
        }
    } else {
        true
    }
}

/// The tree evaluated at every input, indexed by [`FeatureVector::index`].
pub fn truth_table() -> [bool; 64] {
    let mut table = [false; 64];
    for (index, entry) in table.iter_mut().enumerate() {
        *entry = classify(&FeatureVector::from_index(index));
    }
    table
}
