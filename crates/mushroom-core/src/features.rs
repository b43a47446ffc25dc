//! Categorical values to binary features.

/// The six binary inputs of the decision tree.
///
/// Bit order: `odor_n`, `stalk_root_c`, `stalk_surface_below_ring_y`,
/// `spore_print_color_r`, `odor_a`, `odor_l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureVector {
    pub odor_n: bool,
    pub stalk_root_c: bool,
    pub stalk_surface_below_ring_y: bool,
    pub spore_print_color_r: bool,
    pub odor_a: bool,
    pub odor_l: bool,
}

impl FeatureVector {
    pub const LEN: usize = 6;

    pub fn from_bits(bits: [u8; 6]) -> Self {
        Self {
            odor_n: bits[0] != 0,
            stalk_root_c: bits[1] != 0,
            stalk_surface_below_ring_y: bits[2] != 0,
            spore_print_color_r: bits[3] != 0,
            odor_a: bits[4] != 0,
            odor_l: bits[5] != 0,
        }
    }

    /// Features as 0/1 values in bit order.
    pub fn bits(&self) -> [u8; 6] {
        [
            self.odor_n as u8,
            self.stalk_root_c as u8,
            self.stalk_surface_below_ring_y as u8,
            self.spore_print_color_r as u8,
            self.odor_a as u8,
            self.odor_l as u8,
        ]
    }

    /// Index into a 64-entry truth table, `odor_n` as the most significant bit.
    pub fn index(&self) -> usize {
        self.bits()
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | bit as usize)
    }

    pub fn from_index(index: usize) -> Self {
        let mut bits = [0u8; 6];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = ((index >> (Self::LEN - 1 - i)) & 1) as u8;
        }
        Self::from_bits(bits)
    }
}

/// Encode the four categorical values as tree features.
///
/// Inputs are compared as given; callers validate first.
pub fn extract(
    odor: &str,
    stalk_root: &str,
    stalk_surface_below_ring: &str,
    spore_print_color: &str,
) -> FeatureVector {
    FeatureVector {
        odor_n: odor == "n",
        stalk_root_c: stalk_root == "c",
        stalk_surface_below_ring_y: stalk_surface_below_ring == "y",
        spore_print_color_r: spore_print_color == "r",
        odor_a: odor == "a",
        odor_l: odor == "l",
    }
}
