use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use log::debug;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Check that `dir` names an existing directory.
///
/// # Errors
/// `Config` for an empty path, `TargetNotFound` / `NotADirectory` otherwise,
/// or `FileRead` when the metadata itself cannot be read.
pub fn ensure_target_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Err(EngineError::Config("target directory path is empty".into()));
    }
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(EngineError::NotADirectory(dir.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(EngineError::TargetNotFound(dir.to_path_buf()))
        }
        Err(source) => Err(EngineError::FileRead {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// List convertible files directly inside `dir`, sorted by file name.
///
/// Not recursive. Only regular files qualify: directories and symlinks are
/// passed over even when their name ends in the extension. The extension
/// match is ASCII case-insensitive.
///
/// # Errors
/// Returns an error if `dir` is not a readable directory.
pub fn collect_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    ensure_target_dir(dir)?;

    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut inputs = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }
        if !has_extension(entry.path(), extension) {
            continue;
        }
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            debug!("skipping non-regular entry {}", entry.path().display());
            continue;
        }
        inputs.push(entry.into_path());
    }
    Ok(inputs)
}

/// `foo.TXT` matches `txt`; `.txt` (a dotfile without extension) does not.
#[must_use]
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Sibling CSV path for an input file.
#[must_use]
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension("csv")
}
