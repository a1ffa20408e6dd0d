//! Utility functions for error handling
//!
//! Helpers for opening the input and report files with an error that says
//! which file failed and why.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::error::{LoaderError, Result};

/// Open a file for reading with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(LoaderError::InvalidPath {
            message: format!("File not found (needed for: {purpose})"),
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(LoaderError::InvalidPath {
            message: format!("Path is not a file (expected a file for: {purpose})"),
            path: path.to_path_buf(),
        });
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                format!("Permission denied opening {}", path.display())
            }
            _ => format!("Failed to open {} for: {purpose}", path.display()),
        };
        LoaderError::io(context, e)
    })
}

/// Open a file for appending, creating it if it does not exist yet
pub fn open_append_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if path.is_dir() {
        return Err(LoaderError::InvalidPath {
            message: format!("Path is a directory (expected a file for: {purpose})"),
            path: path.to_path_buf(),
        });
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    format!("Permission denied appending to {}", path.display())
                }
                _ => format!("Failed to open {} for: {purpose}", path.display()),
            };
            LoaderError::io(context, e)
        })
}
