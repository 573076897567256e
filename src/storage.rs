//! Persistence of compressed arrays.
//!
//! Compressed arrays are opaque word blobs; this module only frames them in
//! a checksummed stream so that index data can be written to and read back
//! from any `std::io` sink or source, usually a file.
//!
//! # Example
//!
//! ```
//! use mvd_search::codec;
//! use mvd_search::storage::{read_arrays, write_arrays};
//!
//! # fn main() -> mvd_search::error::Result<()> {
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("offsets.bin");
//!
//! write_arrays(&path, &[codec::encode(&[3, 14, 159])])?;
//! let arrays = read_arrays(&path)?;
//! assert_eq!(arrays[0].decode(), vec![3, 14, 159]);
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::codec::CompressedArray;
use crate::error::Result;

pub mod word_stream;

pub use word_stream::{END_MARKER, WordReader, WordWriter};

/// Write `arrays` to a new file at `path`, replacing any existing file.
pub fn write_arrays<P: AsRef<Path>>(path: P, arrays: &[CompressedArray]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = WordWriter::new(BufWriter::new(file));
    for array in arrays {
        writer.write_array(array)?;
    }
    writer.finish()?;
    Ok(())
}

/// Read every array stored in the file at `path`.
pub fn read_arrays<P: AsRef<Path>>(path: P) -> Result<Vec<CompressedArray>> {
    let file = File::open(path)?;
    WordReader::new(BufReader::new(file)).read_all()
}
