use anyhow::Result;

use crate::{CliTest, stderr};

#[test]
fn test_missing_path_argument() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage"));

    Ok(())
}

#[test]
fn test_nonexistent_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["missing.go"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Cannot access path: missing.go"));

    Ok(())
}

#[test]
fn test_syntax_error_aborts() -> Result<()> {
    let test = CliTest::with_file(
        "broken.go",
        "package main\n\nfunc main() {\n\tl.Get(\"x\"\n}\n",
    )?;

    let output = test.run(&["broken.go"])?;
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("broken.go:"), "{}", err);
    assert!(err.contains("syntax error"), "{}", err);

    Ok(())
}

#[test]
fn test_bad_domain_literal_aborts() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nvar a = l.GetD(\"a/b\", \"save\")\n",
    )?;

    let output = test.run(&["main.go"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid domain in l.GetD at main.go:3"));
    assert!(!test.exists("a"));

    Ok(())
}

#[test]
fn test_missing_output_dir() -> Result<()> {
    let test = CliTest::with_file("main.go", "package main\n\nvar a = l.Get(\"A\")\n")?;

    let output = test.run(&["main.go", "nowhere"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to create catalog file"));

    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let test = CliTest::with_file("main.go", "package main\n\nvar a = l.Get(\"A\")\n")?;
    test.write_file(".xgotextrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.run(&["main.go"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));
    assert!(!test.root().join("default.po").exists());

    Ok(())
}

#[test]
fn test_top_level_statement_aborts() -> Result<()> {
    let test = CliTest::with_file("main.go", "package main\n\nl.Get(\"top\")\n")?;

    let output = test.run(&["main.go"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("main.go:3:1: syntax error"));
    assert!(!test.exists("default.po"));

    Ok(())
}

#[test]
fn test_missing_package_clause_aborts() -> Result<()> {
    let test = CliTest::with_file("main.go", "func main() {\n\tl.Get(\"x\")\n}\n")?;

    let output = test.run(&["main.go"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("package statement must be first"));

    Ok(())
}
