//! Settings file loading.

use rewind_tui::Settings;
use std::io::Write;
use std::path::Path;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log_file(), Path::new("rewind.log"));
    assert_eq!(settings.compact_width(), 60);
}

#[test]
fn test_file_values_are_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();
    writeln!(file, "start_reversed = true").unwrap();

    let settings = Settings::load_or_default(file.path()).unwrap();
    assert_eq!(settings.log_file(), Path::new("game.log"));
    assert_eq!(settings.log_filter(), "debug");
    assert!(settings.start_reversed());
    assert_eq!(settings.compact_width(), 60);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "start_reversed = \"maybe\"").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
