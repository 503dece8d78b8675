use std::io::Write;

use clap::error::ErrorKind;

use super::*;

const WENDYS_HTML: &str = include_str!("../../placestew-scraper/tests/fixtures/wendys.html");
const LISTING_HTML: &str =
    include_str!("../../placestew-scraper/tests/fixtures/listing_names.html");

fn html_file(html: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".html")
        .tempfile()
        .expect("temp file");
    file.write_all(html.as_bytes()).expect("write html");
    file
}

fn cli_for(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("expected valid cli args")
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_bare_file_argument() {
    let cli = cli_for(&["placestew", "page.html"]);
    assert_eq!(cli.file, PathBuf::from("page.html"));
    assert!(cli.output.is_none());
    assert!(!cli.json);
    assert!(!cli.pretty);
    assert!(!cli.listing);
}

#[test]
fn parses_short_flags() {
    let cli = cli_for(&["placestew", "page.html", "-o", "out.json", "-j", "-p", "-l"]);
    assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    assert!(cli.json);
    assert!(cli.pretty);
    assert!(cli.listing);
}

#[test]
fn parses_long_flags() {
    let cli = cli_for(&[
        "placestew",
        "--output",
        "out.json",
        "--json",
        "--pretty",
        "--listing",
        "page.html",
    ]);
    assert_eq!(cli.file, PathBuf::from("page.html"));
    assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    assert!(cli.json && cli.pretty && cli.listing);
}

#[test]
fn file_argument_is_required() {
    let err = Cli::try_parse_from(["placestew"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn lowercase_v_prints_version() {
    let err = Cli::try_parse_from(["placestew", "-v"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    let err = Cli::try_parse_from(["placestew", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn log_level_comes_from_valid_config() {
    let config = Ok(AppConfig {
        log_level: "debug".to_string(),
        maps_base_url: "https://www.google.com/maps".to_string(),
        search_timeout_ms: 10_000,
        search_poll_interval_ms: 250,
        search_max_retries: 2,
        search_retry_delay_ms: 1_000,
    });
    assert_eq!(log_level(&config), "debug");
}

#[test]
fn invalid_search_config_falls_back_to_default_log_level() {
    let config = Err(ConfigError::InvalidEnvVar {
        var: "PLACESTEW_SEARCH_TIMEOUT_MS".to_string(),
        reason: "invalid digit found in string".to_string(),
    });
    assert_eq!(log_level(&config), DEFAULT_LOG_LEVEL);
}

#[test]
fn rendering_does_not_depend_on_search_config() {
    let file = html_file(WENDYS_HTML);
    let path = file.path().to_str().expect("utf-8 path");
    let config: Result<AppConfig, ConfigError> = Err(ConfigError::InvalidEnvVar {
        var: "PLACESTEW_SEARCH_TIMEOUT_MS".to_string(),
        reason: "invalid digit found in string".to_string(),
    });

    assert_eq!(log_level(&config), "warn");
    let rendered = render_file(&cli_for(&["placestew", path])).expect("render");
    assert!(rendered.starts_with(r#"{"name":"Wendy's""#));
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn compact_output_is_single_line() {
    let file = html_file(WENDYS_HTML);
    let path = file.path().to_str().expect("utf-8 path");
    let rendered = render_file(&cli_for(&["placestew", path])).expect("render");

    assert!(!rendered.contains('\n'));
    assert!(rendered.starts_with(r#"{"name":"Wendy's","rating":3.9,"review_count":1107,"#));
}

#[test]
fn pretty_output_is_indented() {
    let file = html_file(WENDYS_HTML);
    let path = file.path().to_str().expect("utf-8 path");
    let rendered = render_file(&cli_for(&["placestew", path, "-p"])).expect("render");

    assert!(rendered.starts_with("{\n  \"name\": \"Wendy's\","));
    assert_eq!(rendered.lines().count(), 12);
}

#[test]
fn unrelated_page_renders_all_nulls() {
    let file = html_file("<p>nothing</p>");
    let path = file.path().to_str().expect("utf-8 path");
    let rendered = render_file(&cli_for(&["placestew", path])).expect("render");

    let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
    let object = value.as_object().expect("json object");
    assert_eq!(object.len(), 10);
    assert!(object.values().all(serde_json::Value::is_null));
}

#[test]
fn listing_renders_an_array() {
    let file = html_file(LISTING_HTML);
    let path = file.path().to_str().expect("utf-8 path");
    let rendered = render_file(&cli_for(&["placestew", path, "--listing"])).expect("render");

    let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
    let records = value.as_array().expect("json array");
    assert_eq!(records.len(), 8);
    assert_eq!(records[0]["name"], "Long John Silver's");
    assert_eq!(records[7]["name"], "Long John Silver's");
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.html");
    let path = missing.to_str().expect("utf-8 path");

    let err = render_file(&cli_for(&["placestew", path])).unwrap_err();
    assert!(
        err.to_string().starts_with("file not found:"),
        "unexpected error: {err:#}"
    );

    let err = render_file(&cli_for(&["placestew", path, "-l"])).unwrap_err();
    assert!(err.to_string().starts_with("file not found:"));
}

#[test]
fn output_file_receives_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("wendys.json");
    let file = html_file(WENDYS_HTML);
    let path = file.path().to_str().expect("utf-8 path");

    let rendered = render_file(&cli_for(&["placestew", path])).expect("render");
    output::emit(&rendered, Some(target.as_path())).expect("emit");

    let written = std::fs::read_to_string(&target).expect("read output");
    assert_eq!(written, rendered);
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("no-such-dir").join("out.json");

    let err = output::emit("{}", Some(target.as_path())).unwrap_err();
    assert!(err.to_string().starts_with("failed to write output to"));
}
