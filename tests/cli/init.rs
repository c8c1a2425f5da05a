use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .sheetcheckrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".sheetcheckrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["styleSheetObjectNames"][0], "StyleSheet");
    assert_eq!(parsed["enableImportsCheck"], false);
    assert_eq!(parsed["ignoreTestFiles"], true);
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sheetcheckrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .sheetcheckrc.json already exists
    ");

    assert_eq!(test.read_file(".sheetcheckrc.json")?, "{}");
    assert!(test.root().join(".git").exists());

    Ok(())
}
