//! Configuration for the integer array codec.

use serde::{Deserialize, Serialize};

/// Upper bounds used to classify the largest positive value of an array.
///
/// Negative values are always classified by their true two's-complement
/// ranges. The choice only affects which byte width the encoder picks;
/// every stream decodes the same way.
///
/// # Variants
///
/// - **Legacy** (default): `127 / 32766 / 8388606`. Matches the widths found
///   in existing persisted index data, where `32767` and `8388607` take one
///   byte more than strictly necessary.
/// - **TwosComplement**: `127 / 32767 / 8388607`, the exact signed maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthThresholds {
    #[default]
    Legacy,
    TwosComplement,
}

impl WidthThresholds {
    /// Largest positive value storable at 1, 2 and 3 bytes.
    pub fn max_limits(&self) -> [i32; 3] {
        match self {
            WidthThresholds::Legacy => [127, 32_766, 8_388_606],
            WidthThresholds::TwosComplement => [127, 32_767, 8_388_607],
        }
    }
}

/// Configuration for [`IntArrayCodec`](crate::codec::IntArrayCodec).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Thresholds for positive values.
    pub thresholds: WidthThresholds,
}

impl CodecConfig {
    /// Create a configuration with the given thresholds.
    pub fn with_thresholds(thresholds: WidthThresholds) -> Self {
        CodecConfig { thresholds }
    }
}
