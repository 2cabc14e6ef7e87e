//! Shared testing utilities for schedout tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog used across integration tests.
///
/// - `suzy` may schedule, can write `/public`, has a user default and a home folder.
/// - `admin` may schedule, has only a home folder.
/// - `tiffany` may not schedule at all.
/// - `/locked` disables scheduling through metadata.
pub const CATALOG: &str = r#"
[settings]
default-scheduler-output-path = "/system/output"

[[folders]]
path = "/public"
read-write = ["suzy", "admin"]

[[folders]]
path = "/locked"
read-write = ["suzy", "tiffany"]
metadata = { schedulable = "false" }

[[folders]]
path = "/system/output"

[[folders]]
path = "/home/suzy"
read-write = ["suzy"]

[[folders]]
path = "/home/suzy/reports"
read-write = ["suzy"]

[[folders]]
path = "/home/admin"
read-write = ["admin"]

[[folders]]
path = "/home/tiffany"
read-write = ["tiffany"]

[[files]]
path = "/public/readme.txt"

[users.suzy]
actions = ["scheduler.manage"]
settings = { default-scheduler-output-path = "/home/suzy/reports" }

[users.admin]
actions = ["scheduler.manage"]

[users.tiffany]
actions = []
"#;

/// Temporary directory holding a catalog file.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self::with_catalog(CATALOG)
    }

    pub fn with_catalog(content: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::write(root.path().join("catalog.toml"), content).expect("Failed to write catalog");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.path().join("catalog.toml")
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("resolver.toml");
        fs::write(&path, content).expect("Failed to write resolver config");
        path
    }

    /// Build a command for invoking the compiled `schedout` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("schedout").expect("Failed to locate schedout binary");
        cmd.current_dir(self.root());
        cmd
    }

    /// `schedout resolve` against this context's catalog.
    pub fn resolve(&self, user: &str, filename: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg("resolve")
            .arg("--catalog")
            .arg(self.catalog_path())
            .args(["--user", user, "--filename", filename]);
        cmd
    }
}
