// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::csv::{Delim, to_export_string};
use crate::params::EXPORT_BASENAME;

/// Default export filename for the chosen format:
/// `preisvergleich.csv` / `preisvergleich.tsv`. Both frontends go
/// through this, so the name can't drift between them.
pub fn default_export_name(delim: Delim) -> String {
    join!(EXPORT_BASENAME, ".", delim.ext())
}

/// Write the comparison table to a single delimited file.
/// Returns the final path written to.
pub fn write_export(
    path: &Path,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    delim: Delim,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(headers, rows, include_headers, delim.sep());
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// `-o` may name a file or a directory; a directory (existing or hinted
/// by a trailing separator) gets the default filename appended.
pub fn resolve_out_path(
    user_o: Option<&Path>,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let Some(p) = user_o else {
        return Ok(PathBuf::from(default_filename));
    };
    if looks_like_dir_hint(p) || p.is_dir() {
        ensure_directory(p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
