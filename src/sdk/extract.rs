//! SDK archive unpacking
//!
//! The archive ships as `.tar.bz2`; decompression and unpacking happen
//! in-process instead of shelling out to `tar`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bzip2::read::BzDecoder;
use tar::Archive;

use crate::error::{Result, TokhookError};

/// Unpack a `.tar.bz2` archive into `dest`
pub fn unpack_tar_bz2(archive: &Path, dest: &Path) -> Result<()> {
    let extract_error = |e: std::io::Error| TokhookError::ExtractFailed {
        path: archive.display().to_string(),
        reason: e.to_string(),
    };

    let file = File::open(archive).map_err(extract_error)?;
    let decoder = BzDecoder::new(BufReader::new(file));
    Archive::new(decoder).unpack(dest).map_err(extract_error)
}
