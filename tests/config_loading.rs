// tests/config_loading.rs

use std::fs;

use hookrun::config::{discover_config, load_and_validate, load_from_path, CONFIG_FILE_NAME};

type TestResult = Result<(), Box<dyn std::error::Error>>;

const VALID_CONFIG: &str = r#"
[scripts]
build = "cargo build"
serve = "python -m http.server"

[hooks]
serve = ["change", "periodic"]
"#;

#[test]
fn valid_config_parses_scripts_and_hooks() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, VALID_CONFIG)?;

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.script("build"), Some("cargo build"));
    assert_eq!(cfg.script("serve"), Some("python -m http.server"));
    assert_eq!(cfg.script("missing"), None);

    assert_eq!(cfg.hook_names("serve"), ["change", "periodic"]);
    assert!(cfg.hook_names("build").is_empty());

    Ok(())
}

#[test]
fn discovery_walks_up_from_nested_directories() -> TestResult {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, VALID_CONFIG)?;

    let nested = dir.path().join("src").join("deeply").join("nested");
    fs::create_dir_all(&nested)?;

    let found = discover_config(&nested)?;
    assert_eq!(found, config_path);

    Ok(())
}

#[test]
fn discovery_fails_cleanly_outside_a_project() -> TestResult {
    let dir = tempfile::tempdir()?;

    let err = discover_config(dir.path()).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE_NAME));

    Ok(())
}

#[test]
fn hooks_for_an_unknown_script_are_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        r#"
[scripts]
build = "cargo build"

[hooks]
deploy = ["change"]
"#,
    )?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(err.to_string().contains("deploy"));

    Ok(())
}

#[test]
fn unknown_hook_names_are_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        r#"
[scripts]
build = "cargo build"

[hooks]
build = ["on-save"]
"#,
    )?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(err.to_string().contains("on-save"));

    Ok(())
}

#[test]
fn duplicate_hooks_for_one_script_are_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        r#"
[scripts]
build = "cargo build"

[hooks]
build = ["change", "change"]
"#,
    )?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(err.to_string().contains("more than once"));

    Ok(())
}

#[test]
fn malformed_toml_is_reported_with_the_path() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[scripts\nbroken")?;

    let err = load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("parsing TOML config"));

    Ok(())
}
