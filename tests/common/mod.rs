#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the pr-guard binary, isolated from
/// the user's config directory and log settings.
#[macro_export]
macro_rules! pr_guard {
    ($fixture:expr) => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pr-guard"));
        cmd.current_dir($fixture.path())
            .env("XDG_CONFIG_HOME", $fixture.path().join(".xdg"))
            .env_remove("PR_GUARD_LOG");
        cmd
    }};
}

/// Sizes, labels and lockfiles, but no class or topic checks.
pub const BASIC_CONFIG: &str = r#"
version = "1"

[size]
max_lines = 100

[body]
min_length = 10

[labels]
do_not_merge = ["WIP"]

[[lockfile]]
manifest = "package.json"
lockfile = "package-lock.json"
"#;

pub const MISSING_TESTS_CONFIG: &str = r#"
[missing_tests]

[[topic]]
name = "analytics"
content = ['AnalyticsTracker\.track\(']
label = "Tracks"
instructions = "Analytics events changed."
"#;

/// A small, well-described PR that passes `BASIC_CONFIG`.
pub const CLEAN_SNAPSHOT: &str = r#"{
  "labels": ["bug"],
  "body": "Fixes the crash when opening the settings screen.",
  "files": [
    { "path": "src/settings.ts", "patch": "@@ -1 +1 @@\n-old()\n+fixed()", "insertions": 1, "deletions": 1 }
  ]
}"#;

/// Large, undescribed, WIP-labelled PR touching a manifest without its lockfile.
pub const NOISY_SNAPSHOT: &str = r#"{
  "labels": ["WIP"],
  "body": "",
  "insertions": 350,
  "deletions": 20,
  "files": [
    { "path": "web/package.json", "patch": "+\"left-pad\": \"1.0.0\"", "insertions": 1, "deletions": 0 },
    { "path": "web/src/app.ts", "patch": "+x", "insertions": 349, "deletions": 20 }
  ]
}"#;

/// Adds a Kotlin class without tests and fires an analytics event.
pub const NEW_CLASS_SNAPSHOT: &str = r#"{
  "labels": [],
  "body": "Adds the feature.",
  "files": [
    {
      "path": "app/src/main/java/org/app/Feature.kt",
      "patch": "@@ -0,0 +1,3 @@\n+class Feature(private val repo: Repo) {\n+    fun open() = AnalyticsTracker.track(Stat.OPENED)\n+}"
    }
  ]
}"#;

pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.pr-guard.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".pr-guard.toml", content);
    }

    /// Writes `pr.json` in the fixture root.
    pub fn create_snapshot(&self, content: &str) {
        self.create_file("pr.json", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
