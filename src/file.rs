// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::{parse_rows, parse_lines, write_rows};
use crate::error::{Error, Result};

/// Fail with `MissingInput` unless `path` is an existing file.
pub fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::MissingInput(path.to_path_buf()))
    }
}

/// Read a CSV file into raw rows (header row included).
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    require_file(path)?;
    let file = File::open(path)?;
    parse_rows(BufReader::new(file))
}

/// Read a headerless dump as logical lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    require_file(path)?;
    let file = File::open(path)?;
    parse_lines(BufReader::new(file))
}

/// Ensure parent dir exists; create/truncate file; write header + rows.
pub fn write_table(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_rows(&mut out, headers, rows)?;
    out.flush()?;
    Ok(())
}

/// A trailing separator (or an existing directory) means "put the default file in here".
pub fn resolve_single_out_path(user_o: &Path, default_filename: &str) -> Result<PathBuf> {
    let s = user_o.to_string_lossy();
    if s.is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(&s));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Config(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
