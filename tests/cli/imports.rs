use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const APP: &str = r#"import { styles } from './styles';

export const App = () => <View style={styles.used} />;
"#;

const STYLES: &str = r#"export const styles = StyleSheet.create({
    used: {},
    forgotten: {},
});
"#;

#[test]
fn test_imports_ignored_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.js", APP)?;
    test.write_file("src/styles.js", STYLES)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 source files - no issues found

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_imported_unused_style_reported_at_import() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/App.js", APP)?;
    test.write_file("src/styles.js", STYLES)?;

    assert_cmd_snapshot!(test.check_command().arg("--enable-imports-check"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Unused style detected: styles.forgotten"  no-unused-styles
      --> ./src/App.js:1:10
      |
    1 | import { styles } from './styles';
      |          ^

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_imports_check_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sheetcheckrc.json", r#"{ "enableImportsCheck": true }"#)?;
    test.write_file("src/App.js", APP)?;
    test.write_file("src/styles.js", STYLES)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Unused style detected: styles.forgotten"  no-unused-styles
      --> ./src/App.js:1:10
      |
    1 | import { styles } from './styles';
      |          ^

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_unresolvable_import() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.js",
        r#"import { styles } from './missing';

export const App = () => <View style={styles.a} />;
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("--enable-imports-check"), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Cannot resolve module './missing'"  import-resolution
      --> ./src/App.js:1:10
      |
    1 | import { styles } from './missing';
      |          ^
      = note: while resolving './missing'

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_import_cycle_is_a_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.js", "export { styles } from './b';")?;
    test.write_file("src/b.js", "export { styles } from './a';")?;
    test.write_file(
        "src/App.js",
        r#"import { styles } from './a';

export const App = () => <View style={styles.a} />;
"#,
    )?;

    insta::with_settings!({
        filters => vec![(r"Import cycle detected through \S+\.js", "Import cycle detected through [PATH]")]
    }, {
        assert_cmd_snapshot!(test.check_command().arg("--enable-imports-check"), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        warning: "Import cycle detected through [PATH]"  import-resolution
          --> ./src/App.js:1:10
          |
        1 | import { styles } from './a';
          |          ^
          = note: while resolving './a'
          = hint: styles imported through this cycle are not checked

        ✘ 1 problem (0 errors, 1 warning)

        ----- stderr -----
        "#);
    });

    Ok(())
}

#[test]
fn test_reserved_and_missing_packages_are_skipped() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.js",
        r#"import React from 'react';
import { StyleSheet, View } from 'react-native';
import { theme } from 'not-installed';

const styles = StyleSheet.create({ a: {} });
export const App = () => <View style={[styles.a, theme]} />;
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("--enable-imports-check"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    "#);

    Ok(())
}
