use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, HEADER, stderr, stdout};

const MAIN_GO: &str = r#"package main

import (
	"fmt"

	"github.com/leonelquinteros/gotext"
)

func main() {
	l := gotext.NewLocale("/locales", "en_US")
	n := 3

	fmt.Println(l.Get("hello"))
	fmt.Println(l.GetN("1 item", "%d items", n))
	fmt.Println(l.GetD("app", "save"))
	fmt.Println(l.GetNC("%d apple", "%d apples", n, "fruit"))
}
"#;

#[test]
fn test_extract_single_file() -> Result<()> {
    let test = CliTest::with_file("main.go", MAIN_GO)?;

    let output = test.run(&["main.go"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} Extracted 4 messages from 1 file into 2 catalogs\n"
    );

    let expected_default = format!(
        "{}{}",
        HEADER,
        r#"
#: main.go:13
#. l.Get
msgid "hello"
msgstr ""

#: main.go:14
#. l.GetN
msgid "1 item"
msgid_plural "%d items"
msgstr[0] ""
msgstr[1] ""

#: main.go:16
#. l.GetNC
msgctxt "fruit"
msgid "%d apple"
msgid_plural "%d apples"
msgstr[0] ""
msgstr[1] ""
"#
    );
    assert_eq!(test.read_file("default.po")?, expected_default);

    let expected_app = format!(
        "{}{}",
        HEADER,
        r#"
#: main.go:15
#. l.GetD
msgid "save"
msgstr ""
"#
    );
    assert_eq!(test.read_file("app.po")?, expected_app);

    Ok(())
}

#[test]
fn test_output_dir_argument() -> Result<()> {
    let test = CliTest::with_file("main.go", MAIN_GO)?;
    test.create_dir("locales")?;

    let output = test.run(&["main.go", "locales"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.exists("locales/default.po"));
    assert!(test.exists("locales/app.po"));
    assert!(!test.exists("default.po"));

    Ok(())
}

#[test]
fn test_package_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "pkg/b.go",
        "package pkg\n\nfunc B() string {\n\treturn l.Get(\"from b\")\n}\n",
    )?;
    test.write_file(
        "pkg/a.go",
        "package pkg\n\nfunc A() string {\n\treturn l.Get(\"from a\")\n}\n",
    )?;
    test.write_file("pkg/sub/c.go", "package sub\n\nvar c = l.Get(\"nested\")\n")?;
    test.write_file("pkg/notes.txt", "l.Get(\"not go\")")?;

    let output = test.run(&["pkg"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog = test.read_file("default.po")?;
    let a = catalog.find("#: pkg/a.go:4").expect("entry from a.go");
    let b = catalog.find("#: pkg/b.go:4").expect("entry from b.go");
    assert!(a < b, "files are processed in name order");
    assert!(!catalog.contains("nested"));
    assert!(!catalog.contains("not go"));

    Ok(())
}

#[test]
fn test_non_literal_calls_are_skipped_silently() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        r#"package main

func main() {
	msg := "dynamic"
	l.Get(msg)
	l.Get("static" + "concat")
	l.GetN("one", "many", "three")
	l.Printf("not a translation call")
}
"#,
    )?;

    let output = test.run(&["main.go"])?;
    assert!(output.status.success());
    assert_eq!(stderr(&output), "");
    assert_eq!(
        stdout(&output),
        "\u{2713} Extracted 0 messages from 1 file into 0 catalogs\n"
    );
    assert!(!test.exists("default.po"));

    Ok(())
}

#[test]
fn test_verbose_reports_skipped_calls() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nfunc main() {\n\tmsg := \"x\"\n\tl.Get(msg)\n\tl.Get(\"ok\")\n}\n",
    )?;

    let output = test.run(&["main.go", "--verbose"])?;
    assert!(output.status.success());

    let err = stderr(&output);
    assert!(err.contains("note: main.go:5: skipped l.Get: argument 1 is not a string literal"));
    assert!(err.contains("Parsing main.go"));
    assert!(err.contains("note: no configuration file found, using default configuration"));

    let out = stdout(&output);
    assert!(out.contains("wrote default.po (1 entry)"));

    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> Result<()> {
    let test = CliTest::with_file("main.go", MAIN_GO)?;

    test.run(&["main.go"])?;
    let first = (test.read_file("default.po")?, test.read_file("app.po")?);

    let output = test.run(&["main.go"])?;
    assert!(output.status.success());
    let second = (test.read_file("default.po")?, test.read_file("app.po")?);

    assert_eq!(first, second);
    assert_eq!(second.0.matches("X-Generator: xgotext").count(), 1);

    Ok(())
}

#[test]
fn test_default_domain_option_and_env() -> Result<()> {
    let test = CliTest::with_file("main.go", "package main\n\nvar a = l.Get(\"A\")\n")?;

    let output = test.run(&["main.go", "--default-domain", "web"])?;
    assert!(output.status.success());
    assert!(test.exists("web.po"));

    let output = test
        .command()
        .arg("main.go")
        .env("XGOTEXT_DEFAULT_DOMAIN", "site")
        .output()?;
    assert!(output.status.success());
    assert!(test.exists("site.po"));
    assert!(!test.exists("default.po"));

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".xgotextrc.json",
        r#"{ "defaultDomain": "messages", "ignores": ["zz_*.go"], "ignoreTestFiles": true }"#,
    )?;
    test.write_file("pkg/main.go", "package pkg\n\nvar a = l.Get(\"kept\")\n")?;
    test.write_file("pkg/main_test.go", "package pkg\n\nvar b = l.Get(\"test\")\n")?;
    test.write_file("pkg/zz_gen.go", "package pkg\n\nvar c = l.Get(\"generated\")\n")?;

    let output = test.run(&["pkg"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog = test.read_file("messages.po")?;
    assert!(catalog.contains("msgid \"kept\""));
    assert!(!catalog.contains("test"));
    assert!(!catalog.contains("generated"));

    let output = test.run(&["pkg", "--no-config"])?;
    assert!(output.status.success());
    let catalog = test.read_file("default.po")?;
    assert_eq!(catalog.matches("#. l.Get").count(), 3);

    Ok(())
}

#[test]
fn test_package_constants_from_sibling_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("pkg/a.go", "package pkg\n\nconst Max = 3\n")?;
    test.write_file(
        "pkg/b.go",
        "package pkg\n\nfunc show() {\n\tl.GetN(\"one\", \"many\", Max)\n}\n",
    )?;

    let output = test.run(&["pkg"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog = test.read_file("default.po")?;
    assert!(catalog.contains("#: pkg/b.go:4\n#. l.GetN\nmsgid \"one\"\nmsgid_plural \"many\"\n"));

    Ok(())
}

#[test]
fn test_multi_line_receiver_stays_on_one_comment_line() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        "package main\n\nfunc run(dir string) {\n\tgotext.NewLocale(dir,\n\t\t\"en\").Get(\"x\")\n}\n",
    )?;

    let output = test.run(&["main.go"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog = test.read_file("default.po")?;
    assert!(catalog.ends_with(
        "\n#: main.go:5\n#. gotext.NewLocale(dir, \"en\").Get\nmsgid \"x\"\nmsgstr \"\"\n"
    ));

    Ok(())
}
