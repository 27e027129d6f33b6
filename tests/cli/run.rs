use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

const BUTTON_TSX: &str = r#"const Item = () => <Label title="全干工程师" />;
"#;

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;
    test.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
    Ok(())
}

#[test]
fn test_missing_target_fails_fast() -> Result<()> {
    let test = CliTest::new()?;
    test.command()
        .args(["--write", "out.yml"])
        .assert()
        .failure()
        .code(2);
    Ok(())
}

#[test]
fn test_missing_write_fails_fast() -> Result<()> {
    let test = CliTest::with_file("project/src/components/button.tsx", BUTTON_TSX)?;
    test.command().arg("project").assert().failure().code(2);

    // Nothing was processed: the source is untouched.
    assert_eq!(test.read_file("project/src/components/button.tsx")?, BUTTON_TSX);
    Ok(())
}

#[test]
fn test_empty_write_list_fails_fast() -> Result<()> {
    let test = CliTest::with_file("project/src/components/button.tsx", BUTTON_TSX)?;
    test.command()
        .args(["project", "--write", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Output file list is empty"));

    assert_eq!(test.read_file("project/src/components/button.tsx")?, BUTTON_TSX);
    Ok(())
}

#[test]
fn test_attribute_extraction_end_to_end() -> Result<()> {
    let test = CliTest::with_file("project/src/components/button.tsx", BUTTON_TSX)?;

    test.command()
        .args(["project", "--write", "out.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1/1, 100.00%)"));

    let rewritten = test.read_file("project/src/components/button.tsx")?;
    assert_eq!(
        rewritten,
        "const Item = () => <Label title={t(\"js.components.button.quan_gan_gong_cheng_shi\")} />;\n"
    );

    let sink = test.read_file("out.yml")?;
    assert!(sink.contains("    components:\n"));
    assert!(sink.contains("      button:\n"));
    assert!(sink.contains("        quan_gan_gong_cheng_shi: '全干工程师'\n"));
    Ok(())
}

#[test]
fn test_jsx_text_and_value_string() -> Result<()> {
    let test = CliTest::with_file(
        "project/src/pages/home.tsx",
        "const person = { name: \"大黄\" };\nconst App = () => <div>我是文本</div>;\n",
    )?;

    test.command()
        .args(["project", "--write", "out.yml"])
        .assert()
        .success();

    let rewritten = test.read_file("project/src/pages/home.tsx")?;
    assert!(rewritten.contains("name: t(\"js.pages.home.da_huang\")"));
    assert!(rewritten.contains("<div>{t(\"js.pages.home.wo_shi_wen_ben\")}</div>"));

    let sink = test.read_file("out.yml")?;
    assert!(sink.contains("da_huang: '大黄'"));
    assert!(sink.contains("wo_shi_wen_ben: '我是文本'"));
    Ok(())
}

#[test]
fn test_template_literal_end_to_end() -> Result<()> {
    let test = CliTest::with_file(
        "project/src/pages/greet.tsx",
        "const msg = `你好，${user.name}`;\n",
    )?;

    test.command()
        .args(["project", "--write", "out.yml"])
        .assert()
        .success();

    let rewritten = test.read_file("project/src/pages/greet.tsx")?;
    assert_eq!(
        rewritten,
        "const msg = t(\"js.pages.greet.ni_hao\", { value1: user.name });\n"
    );

    let sink = test.read_file("out.yml")?;
    assert!(sink.contains("ni_hao: '你好，{{value1}}'"));
    Ok(())
}

#[test]
fn test_multiline_template_left_untouched() -> Result<()> {
    let source = "const msg = `你好\n世界`;\n";
    let test = CliTest::with_file("project/src/pages/raw.tsx", source)?;

    test.command()
        .args(["project", "--write", "out.yml"])
        .assert()
        .success();

    assert_eq!(test.read_file("project/src/pages/raw.tsx")?, source);
    let sink = test.read_file("out.yml")?;
    assert!(sink.contains("empty_i18n_placeholder: null"));
    Ok(())
}

#[test]
fn test_duplicate_text_single_entry_many_call_sites() -> Result<()> {
    let test = CliTest::with_file(
        "project/src/pages/dup.tsx",
        "const a = \"你好\";\nconst b = \"你好\";\nconst c = \"你好\";\n",
    )?;

    test.command()
        .args(["project", "--write", "out.yml"])
        .assert()
        .success();

    let rewritten = test.read_file("project/src/pages/dup.tsx")?;
    assert_eq!(rewritten.matches("t(\"js.pages.dup.ni_hao\")").count(), 3);

    let sink = test.read_file("out.yml")?;
    assert_eq!(sink.matches("ni_hao:").count(), 1);
    Ok(())
}

#[test]
fn test_shared_namespace_header_once_across_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "project/src/components/button.tsx",
        "const a = \"确定\";\n",
    )?;
    test.write_file(
        "project/src/components/input.tsx",
        "const b = \"取消\";\n",
    )?;

    test.command()
        .args(["project", "--write", "out.yml"])
        .assert()
        .success();

    let sink = test.read_file("out.yml")?;
    assert_eq!(sink.matches("    components:\n").count(), 1);
    assert_eq!(sink.matches("      button:\n").count(), 1);
    assert_eq!(sink.matches("      input:\n").count(), 1);
    Ok(())
}

#[test]
fn test_multiple_sinks_all_appended() -> Result<()> {
    let test = CliTest::with_file("project/src/pages/home.tsx", "const a = \"你好\";\n")?;

    test.command()
        .args(["project", "--write", "zh.yml,en.yml"])
        .assert()
        .success();

    let zh = test.read_file("zh.yml")?;
    let en = test.read_file("en.yml")?;
    assert_eq!(zh, en);
    assert!(zh.contains("ni_hao: '你好'"));
    Ok(())
}

#[test]
fn test_dry_run_mutates_nothing() -> Result<()> {
    let test = CliTest::with_file("project/src/components/button.tsx", BUTTON_TSX)?;

    test.command()
        .args(["project", "--write", "out.yml", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quan_gan_gong_cheng_shi"));

    assert_eq!(test.read_file("project/src/components/button.tsx")?, BUTTON_TSX);
    assert!(!test.exists("out.yml"));
    Ok(())
}

#[test]
fn test_ignore_pattern_excludes_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("project/src/pages/home.tsx", "const a = \"你好\";\n")?;
    test.write_file("project/src/legacy/old.tsx", "const b = \"旧版\";\n")?;

    test.command()
        .args(["project", "--write", "out.yml", "--ignore", "**/legacy/**"])
        .assert()
        .success();

    let sink = test.read_file("out.yml")?;
    assert!(sink.contains("ni_hao"));
    assert!(!sink.contains("legacy"));
    assert_eq!(
        test.read_file("project/src/legacy/old.tsx")?,
        "const b = \"旧版\";\n"
    );
    Ok(())
}

#[test]
fn test_config_file_key_prefix() -> Result<()> {
    let test = CliTest::with_file("project/src/pages/home.tsx", "const a = \"你好\";\n")?;
    test.write_file(".hanliftrc.json", r#"{ "keyPrefix": "web" }"#)?;

    test.command()
        .args(["project", "--write", "out.yml"])
        .assert()
        .success();

    let rewritten = test.read_file("project/src/pages/home.tsx")?;
    assert!(rewritten.contains("t(\"web.pages.home.ni_hao\")"));
    Ok(())
}

#[test]
fn test_no_matching_files_succeeds_without_output() -> Result<()> {
    let test = CliTest::new()?;
    test.command()
        .args(["nothing-here", "--write", "out.yml"])
        .assert()
        .success();
    assert!(!test.exists("out.yml"));
    Ok(())
}

#[test]
fn test_unparseable_file_aborts_run() -> Result<()> {
    let test = CliTest::with_file("project/src/pages/broken.ts", "const = ;\n")?;

    test.command()
        .args(["project", "--write", "out.yml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("broken.ts"));
    Ok(())
}
