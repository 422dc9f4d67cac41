//! Unit tests for session configuration parsing.

use super::*;
use mockable::MockEnv;
use rstest::rstest;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn mock_env(vars: &[(&str, String)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(name, value)| ((*name).to_owned(), value.clone()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn key_file(len: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(&vec![b'k'; len]).expect("write key");
    file
}

fn expect_error(result: Result<SessionSettings, SessionConfigError>) -> SessionConfigError {
    match result {
        Ok(_) => panic!("expected session configuration to fail"),
        Err(error) => error,
    }
}

#[rstest]
fn release_accepts_long_secret() {
    let env = mock_env(&[
        (SECRET_ENV, "s".repeat(SESSION_KEY_MIN_LEN)),
        (COOKIE_SECURE_ENV, "0".to_owned()),
    ]);

    let settings = session_settings_from_env(&env, BuildMode::Release).expect("valid settings");

    assert!(!settings.cookie_secure);
    assert_eq!(settings.key_source, KeySource::Secret);
}

#[rstest]
fn secret_takes_precedence_over_key_file() {
    let file = key_file(SESSION_KEY_MIN_LEN);
    let path = file.path().to_string_lossy().into_owned();
    let env = mock_env(&[
        (SECRET_ENV, "s".repeat(SESSION_KEY_MIN_LEN)),
        (KEY_FILE_ENV, path),
        (COOKIE_SECURE_ENV, "1".to_owned()),
    ]);

    let settings = session_settings_from_env(&env, BuildMode::Release).expect("valid settings");

    assert_eq!(settings.key_source, KeySource::Secret);
}

#[rstest]
fn release_reads_key_file() {
    let file = key_file(SESSION_KEY_MIN_LEN);
    let env = mock_env(&[
        (KEY_FILE_ENV, file.path().to_string_lossy().into_owned()),
        (COOKIE_SECURE_ENV, "yes".to_owned()),
    ]);

    let settings = session_settings_from_env(&env, BuildMode::Release).expect("valid settings");

    assert!(settings.cookie_secure);
    assert_eq!(settings.key_source, KeySource::File(file.path().to_path_buf()));
}

#[rstest]
fn keys_from_equal_material_match() {
    let env = mock_env(&[
        (SECRET_ENV, "s".repeat(SESSION_KEY_MIN_LEN)),
        (COOKIE_SECURE_ENV, "1".to_owned()),
    ]);

    let first = session_settings_from_env(&env, BuildMode::Release).expect("first");
    let second = session_settings_from_env(&env, BuildMode::Release).expect("second");

    assert_eq!(first.key.master(), second.key.master());
}

#[rstest]
fn release_rejects_short_secret() {
    let env = mock_env(&[
        (SECRET_ENV, "short".to_owned()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
    ]);

    let err = expect_error(session_settings_from_env(&env, BuildMode::Release));

    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort {
            length: 5,
            min_len: SESSION_KEY_MIN_LEN,
            ..
        }
    ));
}

#[rstest]
fn release_requires_a_key() {
    let env = mock_env(&[(COOKIE_SECURE_ENV, "1".to_owned())]);

    let err = expect_error(session_settings_from_env(&env, BuildMode::Release));

    assert!(matches!(err, SessionConfigError::MissingEnv { name: SECRET_ENV }));
}

#[rstest]
fn release_reports_unreadable_key_file() {
    let env = mock_env(&[
        (KEY_FILE_ENV, "/nonexistent/contacts/session_key".to_owned()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
    ]);

    let err = expect_error(session_settings_from_env(&env, BuildMode::Release));

    assert!(matches!(err, SessionConfigError::KeyRead { .. }));
}

#[rstest]
fn release_requires_cookie_secure() {
    let env = mock_env(&[(SECRET_ENV, "s".repeat(SESSION_KEY_MIN_LEN))]);

    let err = expect_error(session_settings_from_env(&env, BuildMode::Release));

    assert!(matches!(
        err,
        SessionConfigError::MissingEnv {
            name: COOKIE_SECURE_ENV
        }
    ));
}

#[rstest]
#[case("maybe")]
#[case("")]
fn release_rejects_invalid_cookie_secure(#[case] value: &str) {
    let env = mock_env(&[
        (SECRET_ENV, "s".repeat(SESSION_KEY_MIN_LEN)),
        (COOKIE_SECURE_ENV, value.to_owned()),
    ]);

    let err = expect_error(session_settings_from_env(&env, BuildMode::Release));

    assert!(matches!(err, SessionConfigError::InvalidEnv { .. }));
}

#[rstest]
fn debug_falls_back_to_ephemeral_secure_defaults() {
    let env = mock_env(&[]);

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");

    assert!(settings.cookie_secure);
    assert_eq!(settings.key_source, KeySource::Ephemeral);
}

#[rstest]
#[case("short")]
#[case("0123456789abcdef0123456789abcde")]
fn debug_replaces_underived_keys(#[case] secret: &str) {
    let env = mock_env(&[
        (SECRET_ENV, secret.to_owned()),
        (COOKIE_SECURE_ENV, "0".to_owned()),
    ]);

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug fallback");

    assert_eq!(settings.key_source, KeySource::Ephemeral);
}

#[rstest]
fn debug_accepts_keys_shorter_than_release_minimum() {
    let env = mock_env(&[(SECRET_ENV, "s".repeat(DERIVE_MIN_LEN))]);

    let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug key");

    assert_eq!(settings.key_source, KeySource::Secret);
}

#[rstest]
#[case("1", Some(true))]
#[case("TRUE", Some(true))]
#[case("n", Some(false))]
#[case("off", None)]
fn booleans_parse_case_insensitively(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parse_bool(raw), expected);
}
