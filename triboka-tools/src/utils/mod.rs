// Copyright 2026, Triboka

//! General purpose utilities.

use std::{fs, path::Path};

pub mod color;

/// Check if a directory exists, creating it (and its parents) if not.
pub fn create_dir_if_dne(path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
