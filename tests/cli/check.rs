use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{BROKEN_CATALOG, CliTest, SMALL_CATALOG};

#[test]
fn test_check_demo_catalog_is_clean() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("check"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No issues found in 12 keys

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_warns_on_incomplete_leaves() -> Result<()> {
    let test = CliTest::with_file("catalog.json", SMALL_CATALOG)?;

    // Missing non-fallback languages are warnings only.
    assert_cmd_snapshot!(test.command().args(["check", "--catalog", "catalog.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: form.email is missing: ko

    ✘ 0 errors, 1 warning in 3 keys

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_fails_on_missing_fallback() -> Result<()> {
    let test = CliTest::with_file("catalog.json", BROKEN_CATALOG)?;

    assert_cmd_snapshot!(test.command().args(["check", "--catalog", "catalog.json"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: broken has no 'en' fallback translation

    ✘ 1 error, 0 warnings in 2 keys

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_reports_errors_before_warnings() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.json",
        r#"{
  "title": { "en": "Welcome" },
  "footer": { "ko": "바닥글" },
  "menu": { "home": { "ja": "ホーム" } }
}"#,
    )?;

    assert_cmd_snapshot!(test.command().args(["check", "--catalog", "catalog.json"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: footer has no 'en' fallback translation
    error: menu.home has no 'en' fallback translation
    warning: footer is missing: ja
    warning: menu.home is missing: ko
    warning: title is missing: ja, ko

    ✘ 2 errors, 3 warnings in 3 keys

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_includes_configured_languages() -> Result<()> {
    let test = CliTest::with_file("catalog.json", r#"{"title": {"en": "Welcome"}}"#)?;
    test.write_file(
        ".i18nbindrc.json",
        r#"{ "catalog": "catalog.json", "languages": ["en", "ja"], "queryDefault": "ja" }"#,
    )?;

    assert_cmd_snapshot!(test.command().arg("check"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: title is missing: ja

    ✘ 0 errors, 1 warning in 1 keys

    ----- stderr -----
    ");

    Ok(())
}
