use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_full_report() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale(
        "en",
        "common",
        r#"{"app": {"title": "Trail", "subtitle": "Walk"}, "nav": {"home": "Home"}}"#,
    )?;
    test.write_locale(
        "he",
        "common",
        r#"{"app": {"title": "שביל"}, "nav": {"home": "בית", "about": "אודות"}}"#,
    )?;
    test.write_locale("en", "trail", r#"{"start": "Start"}"#)?;
    test.write_locale("he", "trail", r#"{"start": "התחל"}"#)?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let expected = "\
=== Key Counts ===
EN common.json: 3 keys
HE common.json: 3 keys
EN trail.json: 1 keys
HE trail.json: 1 keys

=== Missing in Hebrew common.json ===
Total missing: 1
  - app.subtitle

=== Missing in Hebrew trail.json ===
Total missing: 0

=== Extra keys in Hebrew common.json (not in English) ===
Total extra: 1
  - nav.about

=== Extra keys in Hebrew trail.json (not in English) ===
Total extra: 0
";
    assert_eq!(stdout(&output), expected);

    Ok(())
}

#[test]
fn test_identical_bundles_report_no_differences() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let report = stdout(&output);
    assert!(report.contains("Total missing: 0"));
    assert!(report.contains("Total extra: 0"));
    assert!(!report.contains("  - "));

    Ok(())
}

#[test]
fn test_truncates_long_missing_list() -> Result<()> {
    let test = CliTest::new()?;

    let entries: Vec<String> = (1..=25)
        .map(|i| format!(r#""key{:02}": "text""#, i))
        .collect();
    test.write_locale("en", "common", &format!("{{{}}}", entries.join(", ")))?;
    test.write_locale("he", "common", "{}")?;
    test.write_locale("en", "trail", "{}")?;
    test.write_locale("he", "trail", "{}")?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let report = stdout(&output);
    assert!(report.contains("Total missing: 25"));
    assert!(report.contains("  - key01"));
    assert!(report.contains("  - key20"));
    assert!(!report.contains("  - key21"));
    assert!(report.contains("  ... and 5 more"));

    Ok(())
}

#[test]
fn test_verbose_lists_all_keys() -> Result<()> {
    let test = CliTest::new()?;

    let entries: Vec<String> = (1..=25)
        .map(|i| format!(r#""key{:02}": "text""#, i))
        .collect();
    test.write_locale("en", "common", &format!("{{{}}}", entries.join(", ")))?;
    test.write_locale("he", "common", "{}")?;
    test.write_locale("en", "trail", "{}")?;
    test.write_locale("he", "trail", "{}")?;

    let output = test.command().arg("--verbose").output()?;

    assert!(output.status.success());
    let report = stdout(&output);
    assert!(report.contains("  - key25"));
    assert!(!report.contains("more"));

    Ok(())
}

#[test]
fn test_missing_document_is_fatal() -> Result<()> {
    let test = CliTest::with_default_locales()?;
    std::fs::remove_file(test.root().join("src/locales/he/trail.json"))?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "", "no partial report should be printed");
    let err = stderr(&output);
    assert!(err.contains("'trail'"));
    assert!(err.contains("'he'"));
    assert!(err.contains("he/trail.json"));

    Ok(())
}

#[test]
fn test_malformed_document_is_fatal() -> Result<()> {
    let test = CliTest::with_default_locales()?;
    test.write_locale("he", "common", "{ not valid json")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Failed to parse JSON file"));

    Ok(())
}

#[test]
fn test_non_object_root_is_fatal() -> Result<()> {
    let test = CliTest::with_default_locales()?;
    test.write_locale("en", "common", r#"["not", "a", "bundle"]"#)?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Expected a JSON object"));

    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keyauditrc.json",
        r#"{
         "localesRoot": "translations",
         "referenceLocale": "en",
         "targetLocale": "fr",
         "namespaces": ["app"]
     }"#,
    )?;
    test.write_file("translations/en/app.json", r#"{"greeting": "Hello"}"#)?;
    test.write_file("translations/fr/app.json", r#"{"greeting": "Bonjour"}"#)?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let report = stdout(&output);
    assert!(report.contains("EN app.json: 1 keys"));
    assert!(report.contains("FR app.json: 1 keys"));
    assert!(report.contains("=== Missing in French app.json ==="));

    Ok(())
}

#[test]
fn test_locales_root_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("bundles/en/common.json", r#"{"a": 1}"#)?;
    test.write_file("bundles/he/common.json", r#"{"a": 1}"#)?;
    test.write_file("bundles/en/trail.json", "{}")?;
    test.write_file("bundles/he/trail.json", "{}")?;

    let output = test.command().args(["--locales-root", "bundles"]).output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("EN common.json: 1 keys"));

    Ok(())
}

#[test]
fn test_identical_locales_rejected() -> Result<()> {
    let test = CliTest::with_default_locales()?;

    let output = test.command().args(["--target-locale", "en"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("must differ"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("--locales-root"));
    assert!(help.contains("--target-locale"));

    Ok(())
}
