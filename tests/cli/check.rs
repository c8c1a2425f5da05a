use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.js",
        r#"
const styles = StyleSheet.create({
    container: { flex: 1 },
    title: { fontSize: 20 },
});

export default function App() {
    return (
        <View style={styles.container}>
            <Text style={[styles.title]}>Hello</Text>
        </View>
    );
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_unused_style() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.js",
        r#"const styles = StyleSheet.create({
    container: { flex: 1 },
    unused: { color: 'red' },
});

const App = () => <View style={styles.container} />;
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Unused style detected: styles.unused"  no-unused-styles
      --> ./src/App.js:3:5
      |
    3 |     unused: { color: 'red' },
      |     ^

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_multiple_sheets_in_declaration_order() -> Result<()> {
    let test = CliTest::with_file(
        "src/Card.js",
        r#"const styles = StyleSheet.create({
    zebra: {},
    apple: {},
});
const extra = StyleSheet.create({ used: {}, spare: {} });

export const Card = () => <View style={extra.used} />;
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Unused style detected: styles.zebra"  no-unused-styles
      --> ./src/Card.js:2:5
      |
    2 |     zebra: {},
      |     ^

    error: "Unused style detected: styles.apple"  no-unused-styles
      --> ./src/Card.js:3:5
      |
    3 |     apple: {},
      |     ^

    error: "Unused style detected: extra.spare"  no-unused-styles
      --> ./src/Card.js:5:45
      |
    5 | const extra = StyleSheet.create({ used: {}, spare: {} });
      |                                             ^

    ✘ 3 problems (3 errors, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_module_without_component_is_skipped() -> Result<()> {
    let test = CliTest::with_file(
        "src/theme.js",
        r#"export const styles = StyleSheet.create({ never: {} });"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_custom_style_sheet_object_flag() -> Result<()> {
    let source = r#"const styles = OtherStyleSheet.create({ a: {}, b: {} });
const App = () => <View style={styles.a} />;
"#;
    let test = CliTest::with_file("App.js", source)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    "#);

    assert_cmd_snapshot!(test
        .check_command()
        .args(["--style-sheet-object-name", "OtherStyleSheet"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Unused style detected: styles.b"  no-unused-styles
      --> ./App.js:1:48
      |
    1 | const styles = OtherStyleSheet.create({ a: {}, b: {} });
      |                                                ^

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_custom_style_sheet_object_from_config() -> Result<()> {
    let test = CliTest::with_file(
        "App.js",
        r#"const styles = ThemeSheet.create({ a: {}, b: {} });
const App = () => <View style={styles.b} />;
"#,
    )?;
    test.write_file(
        ".sheetcheckrc.json",
        r#"{ "styleSheetObjectNames": ["ThemeSheet"] }"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Unused style detected: styles.a"  no-unused-styles
      --> ./App.js:1:36
      |
    1 | const styles = ThemeSheet.create({ a: {}, b: {} });
      |                                    ^

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sheetcheckrc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;
    test.write_file(
        "src/generated/App.js",
        r#"const styles = StyleSheet.create({ a: {} });
const App = () => <View />;
"#,
    )?;
    test.write_file("src/index.js", "export {};")?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_test_files_are_ignored() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.test.js",
        r#"const styles = StyleSheet.create({ a: {} });
const App = () => <View />;
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 0 source files - no issues found

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_file("src/Broken.js", "const = ;")?;

    // The parser's own wording is not part of the report format.
    insta::with_settings!({
        filters => vec![(r"(Failed to parse \./src/Broken\.js): [^\x22]*", "$1: [PARSE ERROR]")]
    }, {
        assert_cmd_snapshot!(test.check_command(), @r#"
        success: false
        exit_code: 1
        ----- stdout -----
        error: "Failed to parse ./src/Broken.js: [PARSE ERROR]"  parse-error
          --> ./src/Broken.js

        ✘ 1 problem (1 error, 0 warnings)

        ----- stderr -----
        warning: 1 file(s) could not be parsed (use -v for details)
        "#);
    });

    Ok(())
}

#[test]
fn test_invalid_config_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sheetcheckrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    insta::with_settings!({
        filters => vec![(r"(Invalid glob pattern in 'ignores': \x22\[invalid\x22): .*", "$1: [GLOB ERROR]")]
    }, {
        assert_cmd_snapshot!(test.check_command(), @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Invalid glob pattern in 'ignores': "[invalid": [GLOB ERROR]
        "#);
    });

    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "mobile/App.tsx",
        r#"const styles = StyleSheet.create({ a: {}, b: {} });
export const App = () => <View style={styles.a} />;
"#,
    )?;
    test.write_file(
        "web/App.tsx",
        r#"const styles = StyleSheet.create({ c: {} });
export const App = () => <View />;
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().args(["--source-root", "mobile"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Unused style detected: styles.b"  no-unused-styles
      --> mobile/App.tsx:1:43
      |
    1 | const styles = StyleSheet.create({ a: {}, b: {} });
      |                                           ^

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_config_source_root_from_subdirectory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".sheetcheckrc.json", r#"{ "sourceRoot": "app" }"#)?;
    test.write_file(
        "app/App.js",
        r#"const styles = StyleSheet.create({ a: {}, b: {} });
export const App = () => <View style={styles.a} />;
"#,
    )?;
    test.write_file("tools/build.js", "export {};")?;

    assert_cmd_snapshot!(test.check_command().current_dir(test.root().join("tools")), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Unused style detected: styles.b"  no-unused-styles
      --> ./../app/App.js:1:43
      |
    1 | const styles = StyleSheet.create({ a: {}, b: {} });
      |                                           ^

    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for detecting unused React Native StyleSheet entries

    Usage: sheetcheck [COMMAND]

    Commands:
      check  Check for unused StyleSheet entries
      init   Initialize a new .sheetcheckrc.json configuration file
      serve  Start MCP server for AI coding agents
      help   Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    "#);

    Ok(())
}
