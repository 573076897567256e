//! Fixed-width packing of `i32` arrays.
//!
//! The encoder picks one byte width (1 to 4) for a whole array, the smallest
//! that represents every element losslessly, and stores each element's low
//! bytes big-endian. The packed bytes are regrouped into 32-bit words behind a
//! single header word:
//!
//! ```text
//! word 0     : bits 0-15 = byte width, bits 16-31 = padding bytes (0-3)
//! word 1..N  : payload bytes, 4 per word, most significant byte first,
//!              last word zero-padded
//! ```

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::codec::config::CodecConfig;
use crate::error::{MvdError, Result};

/// Number of bytes in a storage word.
pub const WORD_BYTES: usize = 4;

/// Largest byte width an element can be stored at.
pub const MAX_BYTE_WIDTH: usize = 4;

const WIDTH_MASK: u32 = 0x0000_FFFF;
const PADDING_SHIFT: u32 = 16;

/// Parsed and validated shape of a packed word array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Bytes per element.
    pub byte_width: usize,
    /// Zero bytes appended to fill the last word.
    pub padding: usize,
    /// Number of packed elements.
    pub element_count: usize,
}

impl Layout {
    /// Read the header word and check it against the payload length.
    pub fn parse(words: &[u32]) -> Result<Self> {
        let (&header, payload) = words
            .split_first()
            .ok_or_else(|| MvdError::invalid_format("compressed array has no header word"))?;

        let byte_width = (header & WIDTH_MASK) as usize;
        let padding = ((header >> PADDING_SHIFT) & WIDTH_MASK) as usize;

        if !(1..=MAX_BYTE_WIDTH).contains(&byte_width) {
            return Err(MvdError::invalid_format(format!(
                "numBytes must be between 1 and {MAX_BYTE_WIDTH}, got {byte_width}"
            )));
        }
        if padding >= WORD_BYTES {
            return Err(MvdError::invalid_format(format!(
                "padding must be less than {WORD_BYTES} bytes, got {padding}"
            )));
        }

        let payload_bytes = payload.len() * WORD_BYTES;
        let used = payload_bytes.checked_sub(padding).ok_or_else(|| {
            MvdError::invalid_format(format!(
                "padding of {padding} bytes exceeds a payload of {payload_bytes} bytes"
            ))
        })?;
        if used % byte_width != 0 {
            return Err(MvdError::invalid_format(format!(
                "payload of {used} bytes is not a multiple of the {byte_width}-byte width"
            )));
        }

        Ok(Layout {
            byte_width,
            padding,
            element_count: used / byte_width,
        })
    }

    /// Encode this layout as a header word.
    pub fn header(&self) -> u32 {
        self.byte_width as u32 | (self.padding as u32) << PADDING_SHIFT
    }
}

/// A packed integer array: one header word followed by the payload words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct CompressedArray {
    words: Vec<u32>,
    layout: Layout,
}

impl CompressedArray {
    /// Wrap a word array read from storage, validating its header.
    pub fn from_words(words: Vec<u32>) -> Result<Self> {
        let layout = Layout::parse(&words)?;
        Ok(CompressedArray { words, layout })
    }

    /// All words, header first.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Consume the array and return its words.
    pub fn into_words(self) -> Vec<u32> {
        self.words
    }

    /// The header word.
    pub fn header(&self) -> u32 {
        self.words[0]
    }

    /// Bytes per element.
    pub fn byte_width(&self) -> usize {
        self.layout.byte_width
    }

    /// Zero bytes padding the last payload word.
    pub fn padding(&self) -> usize {
        self.layout.padding
    }

    /// Number of integers this array decodes to.
    pub fn element_count(&self) -> usize {
        self.layout.element_count
    }

    /// Number of words, header included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: a compressed array holds at least its header word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Unpack the original integers.
    pub fn decode(&self) -> Vec<i32> {
        unpack(&self.words[1..], self.layout)
    }
}

impl TryFrom<Vec<u32>> for CompressedArray {
    type Error = MvdError;

    fn try_from(words: Vec<u32>) -> Result<Self> {
        CompressedArray::from_words(words)
    }
}

impl From<CompressedArray> for Vec<u32> {
    fn from(array: CompressedArray) -> Self {
        array.into_words()
    }
}

/// Packs and unpacks `i32` arrays at a single per-array byte width.
#[derive(Debug, Clone, Default)]
pub struct IntArrayCodec {
    config: CodecConfig,
}

impl IntArrayCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        IntArrayCodec { config }
    }

    /// Get the codec configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Smallest byte width that holds both `max_value` (>= 0) and
    /// `min_value` (<= 0).
    pub fn width_needed(&self, max_value: i32, min_value: i32) -> usize {
        let min_bytes = match min_value {
            0 => 0,
            v if v >= -128 => 1,
            v if v >= -32_768 => 2,
            v if v >= -8_388_608 => 3,
            _ => 4,
        };

        let [one, two, three] = self.config.thresholds.max_limits();
        let max_bytes = match max_value {
            v if v <= one => 1,
            v if v <= two => 2,
            v if v <= three => 3,
            _ => 4,
        };

        max_bytes.max(min_bytes)
    }

    /// Pack `values` at the smallest byte width that fits all of them.
    pub fn encode(&self, values: &[i32]) -> CompressedArray {
        // Zero moves neither bound.
        let (max_value, min_value) = values
            .iter()
            .fold((0i32, 0i32), |(max, min), &value| (max.max(value), min.min(value)));
        let byte_width = self.width_needed(max_value, min_value);

        let used = values.len() * byte_width;
        let padding = (WORD_BYTES - used % WORD_BYTES) % WORD_BYTES;
        let mut bytes = vec![0u8; used + padding];
        for (chunk, &value) in bytes[..used].chunks_exact_mut(byte_width).zip(values) {
            // Keeps the low `byte_width` bytes of the two's-complement value.
            BigEndian::write_int(chunk, value as i64, byte_width);
        }

        let layout = Layout {
            byte_width,
            padding,
            element_count: values.len(),
        };
        let mut words = vec![0u32; 1 + bytes.len() / WORD_BYTES];
        words[0] = layout.header();
        BigEndian::read_u32_into(&bytes, &mut words[1..]);

        debug!(
            "Packed {} values (max {max_value}, min {min_value}) at {byte_width} bytes into {} words",
            values.len(),
            words.len()
        );

        CompressedArray { words, layout }
    }

    /// Unpack a word array produced by [`encode`](Self::encode).
    ///
    /// Fails with [`MvdError::InvalidFormat`] when the header's byte width is
    /// outside `1..=4` or the header does not match the payload length.
    pub fn decode(&self, words: &[u32]) -> Result<Vec<i32>> {
        let layout = Layout::parse(words)?;
        trace!(
            "Unpacking {} values at {} bytes from {} words",
            layout.element_count,
            layout.byte_width,
            words.len()
        );
        Ok(unpack(&words[1..], layout))
    }
}

fn unpack(payload: &[u32], layout: Layout) -> Vec<i32> {
    let mut bytes = vec![0u8; payload.len() * WORD_BYTES];
    BigEndian::write_u32_into(payload, &mut bytes);

    let used = layout.element_count * layout.byte_width;
    bytes[..used]
        .chunks_exact(layout.byte_width)
        // Sign-extends from the stored width.
        .map(|chunk| BigEndian::read_int(chunk, layout.byte_width) as i32)
        .collect()
}
