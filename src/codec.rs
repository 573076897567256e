//! Compact integer array codec for persisted index data.
//!
//! Offset and posting arrays are stored at one byte width per array, the
//! smallest that holds every element. See [`int_array`] for the wire layout.
//!
//! # Example
//!
//! ```
//! use mvd_search::codec;
//!
//! let compressed = codec::encode(&[-1, 300, -40_000]);
//! assert_eq!(compressed.byte_width(), 3);
//!
//! let values = codec::decode(compressed.words()).unwrap();
//! assert_eq!(values, vec![-1, 300, -40_000]);
//! ```

pub mod config;
pub mod int_array;

pub use config::{CodecConfig, WidthThresholds};
pub use int_array::{CompressedArray, IntArrayCodec, Layout};

use crate::error::Result;

/// Byte width needed for an array whose extremes are `max_value` and
/// `min_value`, using the default thresholds.
pub fn width_needed(max_value: i32, min_value: i32) -> usize {
    IntArrayCodec::default().width_needed(max_value, min_value)
}

/// Pack `values` with the default codec.
pub fn encode(values: &[i32]) -> CompressedArray {
    IntArrayCodec::default().encode(values)
}

/// Unpack a word array with the default codec.
pub fn decode(words: &[u32]) -> Result<Vec<i32>> {
    IntArrayCodec::default().decode(words)
}
