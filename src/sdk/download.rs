//! SDK archive download
//!
//! Streams the release artifact to a temporary file in the work directory
//! and persists it to its final name only once the body is fully read, so
//! an interrupted download never leaves a partial archive behind.

use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, TokhookError};
use crate::progress::DownloadProgress;

const COPY_BUF_SIZE: usize = 64 * 1024;

/// Download `url` to `dest`, returning the number of bytes written
pub fn download_to(url: &str, dest: &Path) -> Result<u64> {
    let mut response = reqwest::blocking::get(url)?;

    if !response.status().is_success() {
        return Err(TokhookError::DownloadFailed {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| TokhookError::FileWriteFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let progress = DownloadProgress::new(response.content_length());
    let written = match copy_body(url, dest, &mut response, &mut staged, &progress) {
        Ok(written) => {
            progress.finish();
            written
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    staged
        .persist(dest)
        .map_err(|e| TokhookError::FileWriteFailed {
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(written)
}

fn copy_body(
    url: &str,
    dest: &Path,
    body: &mut impl Read,
    staged: &mut NamedTempFile,
    progress: &DownloadProgress,
) -> Result<u64> {
    let mut buf = [0u8; COPY_BUF_SIZE];
    let mut written: u64 = 0;

    loop {
        let n = body.read(&mut buf).map_err(|e| TokhookError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if n == 0 {
            break;
        }
        staged
            .write_all(&buf[..n])
            .map_err(|e| TokhookError::FileWriteFailed {
                path: dest.display().to_string(),
                reason: e.to_string(),
            })?;
        written += n as u64;
        progress.inc(n as u64);
    }

    Ok(written)
}
