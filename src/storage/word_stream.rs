//! Checksummed streams of compressed arrays.
//!
//! Stream layout, all values big-endian `u32`:
//!
//! ```text
//! ( word_count  word_0 .. word_{count-1} )*   one entry per array
//! 0xFFFFFFFF                                  end marker
//! crc32                                       over every preceding byte
//! ```

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::debug;

use crate::codec::CompressedArray;
use crate::error::{MvdError, Result};

/// Word count value that terminates a stream.
pub const END_MARKER: u32 = u32::MAX;

// Caps up-front allocation when a corrupt count is read.
const MAX_PREALLOCATED_WORDS: usize = 1 << 16;

/// Writes compressed arrays to a byte stream.
pub struct WordWriter<W: Write> {
    writer: W,
    hasher: crc32fast::Hasher,
    position: u64,
    arrays: u64,
}

impl<W: Write> WordWriter<W> {
    /// Create a new stream writer.
    pub fn new(writer: W) -> Self {
        WordWriter {
            writer,
            hasher: crc32fast::Hasher::new(),
            position: 0,
            arrays: 0,
        }
    }

    fn write_word(&mut self, word: u32) -> Result<()> {
        self.writer.write_u32::<BigEndian>(word)?;
        self.hasher.update(&word.to_be_bytes());
        self.position += 4;
        Ok(())
    }

    /// Append one array to the stream.
    pub fn write_array(&mut self, array: &CompressedArray) -> Result<()> {
        let count = u32::try_from(array.len())
            .ok()
            .filter(|&count| count != END_MARKER)
            .ok_or_else(|| {
                MvdError::storage(format!("array of {} words is too long", array.len()))
            })?;

        self.write_word(count)?;
        for &word in array.words() {
            self.write_word(word)?;
        }
        self.arrays += 1;
        Ok(())
    }

    /// Bytes written so far, excluding the trailer.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number of arrays written so far.
    pub fn arrays_written(&self) -> u64 {
        self.arrays
    }

    /// Write the end marker and checksum, flush, and return the inner writer.
    pub fn finish(mut self) -> Result<W> {
        self.write_word(END_MARKER)?;
        let checksum = self.hasher.clone().finalize();
        self.writer.write_u32::<BigEndian>(checksum)?;
        self.writer.flush()?;

        debug!(
            "Wrote {} arrays ({} bytes, crc32 {checksum:08x})",
            self.arrays,
            self.position + 4
        );
        Ok(self.writer)
    }
}

/// Reads compressed arrays written by [`WordWriter`].
pub struct WordReader<R: Read> {
    reader: R,
    hasher: crc32fast::Hasher,
    finished: bool,
}

impl<R: Read> WordReader<R> {
    /// Create a new stream reader.
    pub fn new(reader: R) -> Self {
        WordReader {
            reader,
            hasher: crc32fast::Hasher::new(),
            finished: false,
        }
    }

    fn read_word(&mut self) -> Result<u32> {
        let word = self.reader.read_u32::<BigEndian>()?;
        self.hasher.update(&word.to_be_bytes());
        Ok(word)
    }

    /// Read the next array, or `None` once the end marker has been read and
    /// the checksum verified.
    pub fn read_array(&mut self) -> Result<Option<CompressedArray>> {
        if self.finished {
            return Ok(None);
        }

        let count = self.read_word()?;
        if count == END_MARKER {
            let expected = self.hasher.clone().finalize();
            let stored = self.reader.read_u32::<BigEndian>()?;
            if stored != expected {
                return Err(MvdError::storage(format!(
                    "checksum mismatch: stored {stored:08x}, computed {expected:08x}"
                )));
            }
            self.finished = true;
            return Ok(None);
        }

        let count = count as usize;
        let mut words = Vec::with_capacity(count.min(MAX_PREALLOCATED_WORDS));
        for _ in 0..count {
            words.push(self.read_word()?);
        }
        CompressedArray::from_words(words).map(Some)
    }

    /// Read every remaining array and verify the checksum.
    pub fn read_all(mut self) -> Result<Vec<CompressedArray>> {
        let mut arrays = Vec::new();
        while let Some(array) = self.read_array()? {
            arrays.push(array);
        }
        Ok(arrays)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::codec;

    fn write_stream(arrays: &[CompressedArray]) -> Vec<u8> {
        let mut writer = WordWriter::new(Vec::new());
        for array in arrays {
            writer.write_array(array).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn test_stream_round_trip() {
        let arrays = vec![
            codec::encode(&[1, 2, 3]),
            codec::encode(&[]),
            codec::encode(&[-70_000, 12]),
        ];

        let bytes = write_stream(&arrays);
        let restored = WordReader::new(Cursor::new(bytes)).read_all().unwrap();

        assert_eq!(restored, arrays);
        assert_eq!(restored[2].decode(), vec![-70_000, 12]);
    }

    #[test]
    fn test_layout() {
        let bytes = write_stream(&[codec::encode(&[1])]);

        // count, header, payload, end marker, checksum
        assert_eq!(bytes.len(), 5 * 4);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 2]);
        assert_eq!(&bytes[4..8], &[0, 3, 0, 1]);
        assert_eq!(&bytes[8..12], &[1, 0, 0, 0]);
        assert_eq!(&bytes[12..16], &[0xFF; 4]);
        assert_eq!(&bytes[16..20], &crc32fast::hash(&bytes[..16]).to_be_bytes());
    }

    #[test]
    fn test_position_and_count() {
        let mut writer = WordWriter::new(Vec::new());
        writer.write_array(&codec::encode(&[1, 2, 3, 4, 5])).unwrap();
        assert_eq!(writer.arrays_written(), 1);
        assert_eq!(writer.position(), 4 * 4);
    }

    #[test]
    fn test_corruption_is_detected() {
        let mut bytes = write_stream(&[codec::encode(&[10, 20, 30])]);
        bytes[9] ^= 0x01;

        let result = WordReader::new(Cursor::new(bytes)).read_all();
        assert!(matches!(result, Err(MvdError::Storage(_))));
    }

    #[test]
    fn test_truncated_stream() {
        let bytes = write_stream(&[codec::encode(&[10, 20, 30])]);
        let truncated = bytes[..bytes.len() - 6].to_vec();

        let result = WordReader::new(Cursor::new(truncated)).read_all();
        assert!(matches!(result, Err(MvdError::Io(_))));
    }

    #[test]
    fn test_invalid_header_in_stream() {
        let mut writer = Vec::new();
        for word in [1u32, 0x0000_0007] {
            writer.write_u32::<BigEndian>(word).unwrap();
        }

        let result = WordReader::new(Cursor::new(writer)).read_array();
        assert!(matches!(result, Err(MvdError::InvalidFormat(_))));
    }
}
