//! テストフィクスチャ管理

use assert_cmd::Command;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// Metadata lines 1-3 and 5 around the header on line 4.
#[allow(dead_code)]
pub const REFERENCE_LOG: &str = "skip1\nskip2\nskip3\nX\tA\tB\nskip5\n1\tval1\tval2\n2\tval1\n";

#[allow(dead_code)]
pub const REFERENCE_CSV: &str = "A,B\nval1,val2\nval1,\n";

/// A temporary export folder.
#[allow(dead_code)]
pub struct ExportDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl ExportDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// `tabcsv <dir> [args...]`
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tabcsv"));
        cmd.arg(self.dir.path()).args(args).env_remove("RUST_LOG");
        cmd
    }
}
