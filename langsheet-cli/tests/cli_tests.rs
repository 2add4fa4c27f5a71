use std::fs;
use std::path::Path;

use assert_cmd::cargo::CommandCargoExt;
use std::process::Command;
use tempfile::TempDir;

fn langsheet() -> Command {
    Command::cargo_bin("langsheet").expect("binary built")
}

fn write_document(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture document");
}

#[test]
fn test_merge_command_basic() {
    let temp = TempDir::new().unwrap();
    let locales = temp.path().join("locales");
    fs::create_dir(&locales).unwrap();
    write_document(&locales, "en-US.json", r#"{"common": {"title": "Title"}}"#);
    write_document(&locales, "fr-FR.json", r#"{"common": {"title": "Titre"}}"#);

    let output = temp.path().join("translations.csv");
    let result = langsheet()
        .args([
            "merge",
            "-i",
            locales.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(
        result.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv, "Key,en-US,fr-FR\ncommon.title,Title,Titre\n");
}

#[test]
fn test_merge_command_warns_about_invalid_language_file() {
    let temp = TempDir::new().unwrap();
    let locales = temp.path().join("locales");
    fs::create_dir(&locales).unwrap();
    write_document(&locales, "en-US.json", r#"{"greeting": "Hello"}"#);
    write_document(&locales, "english.json", r#"{"greeting": "Hello"}"#);

    let output = temp.path().join("translations.csv");
    let result = langsheet()
        .args([
            "merge",
            "-i",
            locales.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("invalid language code"));
    assert!(stderr.contains("english.json"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(!csv.contains("english"));
}

#[test]
fn test_merge_command_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let result = langsheet()
        .args([
            "merge",
            "-i",
            temp.path().join("no_such_dir").to_str().unwrap(),
            "-o",
            temp.path().join("translations.csv").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_merge_command_empty_input_fails() {
    let temp = TempDir::new().unwrap();
    let locales = temp.path().join("locales");
    fs::create_dir(&locales).unwrap();
    write_document(&locales, "en-US.json", "{}");

    let output = temp.path().join("translations.csv");
    let result = langsheet()
        .args([
            "merge",
            "-i",
            locales.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("No translations found"));
    assert!(!output.exists());
}

#[test]
fn test_merge_command_with_priority_language() {
    let temp = TempDir::new().unwrap();
    let locales = temp.path().join("locales");
    fs::create_dir(&locales).unwrap();
    write_document(&locales, "en-US.json", r#"{"greeting": "Hello"}"#);
    write_document(&locales, "fr-FR.json", r#"{"greeting": "Bonjour"}"#);

    let output = temp.path().join("translations.csv");
    let result = langsheet()
        .args([
            "merge",
            "-i",
            locales.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--priority-language",
            "fr-FR",
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Key,fr-FR,en-US"));
}

#[test]
fn test_split_command_basic() {
    let temp = TempDir::new().unwrap();
    let table = temp.path().join("translations.csv");
    fs::write(&table, "Key,en-US,fr-FR\ncommon.title,Title,Titre\n").unwrap();

    let out = temp.path().join("locales");
    let result = langsheet()
        .args([
            "split",
            "-i",
            table.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(
        result.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let en = fs::read_to_string(out.join("en-US.json")).unwrap();
    assert!(en.contains("\"title\": \"Title\""));
    let fr = fs::read_to_string(out.join("fr-FR.json")).unwrap();
    assert!(fr.contains("\"title\": \"Titre\""));
}

#[test]
fn test_split_command_with_language_filter() {
    let temp = TempDir::new().unwrap();
    let table = temp.path().join("translations.csv");
    fs::write(&table, "Key,en-US,fr-FR\ngreeting,Hello,Bonjour\n").unwrap();

    let out = temp.path().join("locales");
    let result = langsheet()
        .args([
            "split",
            "-i",
            table.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "-l",
            "fr-FR",
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    assert!(out.join("fr-FR.json").exists());
    assert!(!out.join("en-US.json").exists());
}

#[test]
fn test_split_command_rejects_bad_allow_list() {
    let temp = TempDir::new().unwrap();
    let table = temp.path().join("translations.csv");
    fs::write(&table, "Key,en-US\ngreeting,Hello\n").unwrap();

    let result = langsheet()
        .args([
            "split",
            "-i",
            table.to_str().unwrap(),
            "-o",
            temp.path().join("locales").to_str().unwrap(),
            "-l",
            "english",
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("does not match the xx-YY pattern"));
}

#[test]
fn test_split_command_missing_table_fails() {
    let temp = TempDir::new().unwrap();
    let result = langsheet()
        .args([
            "split",
            "-i",
            temp.path().join("no_such.csv").to_str().unwrap(),
            "-o",
            temp.path().join("locales").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_merge_split_round_trip() {
    let temp = TempDir::new().unwrap();
    let locales = temp.path().join("locales");
    fs::create_dir(&locales).unwrap();
    write_document(
        &locales,
        "en-US.json",
        r#"{"menu": {"file": "File", "edit": "Edit"}, "title": "App"}"#,
    );
    write_document(&locales, "ja-JP.json", r#"{"menu": {"file": "ファイル"}}"#);

    let table = temp.path().join("translations.tsv");
    let merge = langsheet()
        .args([
            "merge",
            "-i",
            locales.to_str().unwrap(),
            "-o",
            table.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(merge.status.success());

    let restored = temp.path().join("restored");
    let split = langsheet()
        .args([
            "split",
            "-i",
            table.to_str().unwrap(),
            "-o",
            restored.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(split.status.success());

    let ja = fs::read_to_string(restored.join("ja-JP.json")).unwrap();
    assert!(ja.contains("ファイル"));
    // The key absent for ja-JP stays absent after the round trip.
    assert!(!ja.contains("edit"));
}

#[test]
fn test_completions_command() {
    let result = langsheet().args(["completions", "bash"]).output().unwrap();
    assert!(result.status.success());
    assert!(!result.stdout.is_empty());
}
