use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::{assert_cmd_snapshot, get_cargo_bin};
use tempfile::TempDir;

mod check;
mod resolve;

const BIN_NAME: &str = "i18nbind";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Snapshot settings that hide the temporary project path and JSON
    /// error positions.
    pub fn settings(&self) -> insta::Settings {
        let mut settings = insta::Settings::clone_current();
        settings.add_filter(
            &regex::escape(&self.project_dir.display().to_string()),
            "[PROJECT]",
        );
        settings.add_filter(r" at line \d+ column \d+", "");
        settings
    }
}

/// A small catalog with one top-level leaf and one nested leaf.
pub const SMALL_CATALOG: &str = r#"{
  "title": { "en": "Welcome", "ko": "환영합니다" },
  "form": {
    "email": { "en": "Email address" },
    "submit": { "en": "Send", "ko": "보내기" }
  }
}"#;

/// Catalog whose `broken` leaf has no English text.
pub const BROKEN_CATALOG: &str = r#"{
  "ok": { "en": "Ok", "ko": "확인" },
  "broken": { "ko": "고장" }
}"#;

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage: i18nbind [COMMAND]"));
    assert!(stdout.contains("resolve"));
    Ok(())
}

#[test]
fn test_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".i18nbindrc.json", r#"{ "queryDefault": "fr" }"#)?;

    let _guard = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().arg("keys"), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid config file: "[PROJECT]/.i18nbindrc.json": 'queryDefault' "fr" is not listed in 'languages'.
    "#);

    Ok(())
}
