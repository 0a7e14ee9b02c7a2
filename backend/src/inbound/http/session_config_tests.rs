//! Tests for session configuration parsing.

use std::collections::HashMap;
use std::path::PathBuf;

use actix_web::cookie::SameSite;
use mockable::MockEnv;
use rstest::rstest;
use uuid::Uuid;

use super::*;

fn env_with(vars: &[(&str, &str)]) -> MockEnv {
    let table: HashMap<String, String> = vars
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .returning(move |name| table.get(name).cloned());
    env
}

struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    fn with_len(len: usize) -> Self {
        let path = std::env::temp_dir().join(format!("session_key_{}", Uuid::new_v4()));
        std::fs::write(&path, vec![b'k'; len]).expect("write key file");
        Self { path }
    }

    fn path_str(&self) -> &str {
        self.path.to_str().expect("utf-8 temp path")
    }
}

impl Drop for KeyFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[rstest]
fn debug_mode_defaults_when_env_is_empty() {
    let env = env_with(&[]);

    let settings =
        session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults apply");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn release_mode_requires_explicit_toggles() {
    let env = env_with(&[]);

    let error = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("missing toggles rejected");

    assert!(matches!(
        error,
        SessionConfigError::MissingEnv {
            name: "SESSION_COOKIE_SECURE"
        }
    ));
}

#[rstest]
fn release_mode_rejects_malformed_booleans() {
    let key_file = KeyFile::with_len(64);
    let env = env_with(&[
        ("SESSION_COOKIE_SECURE", "definitely"),
        ("SESSION_SAMESITE", "Strict"),
        ("SESSION_ALLOW_EPHEMERAL", "0"),
        ("SESSION_KEY_FILE", key_file.path_str()),
    ]);

    let error = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("malformed boolean rejected");

    assert!(matches!(
        error,
        SessionConfigError::InvalidEnv {
            name: "SESSION_COOKIE_SECURE",
            ..
        }
    ));
}

#[rstest]
fn release_mode_rejects_insecure_samesite_none() {
    let key_file = KeyFile::with_len(64);
    let env = env_with(&[
        ("SESSION_COOKIE_SECURE", "0"),
        ("SESSION_SAMESITE", "None"),
        ("SESSION_ALLOW_EPHEMERAL", "0"),
        ("SESSION_KEY_FILE", key_file.path_str()),
    ]);

    let error = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("insecure SameSite=None rejected");

    assert!(matches!(error, SessionConfigError::InsecureSameSiteNone));
}

#[rstest]
fn release_mode_rejects_ephemeral_keys() {
    let key_file = KeyFile::with_len(64);
    let env = env_with(&[
        ("SESSION_COOKIE_SECURE", "1"),
        ("SESSION_SAMESITE", "Strict"),
        ("SESSION_ALLOW_EPHEMERAL", "1"),
        ("SESSION_KEY_FILE", key_file.path_str()),
    ]);

    let error = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("ephemeral keys rejected");

    assert!(matches!(error, SessionConfigError::EphemeralNotAllowed));
}

#[rstest]
fn release_mode_rejects_short_keys() {
    let key_file = KeyFile::with_len(16);
    let env = env_with(&[
        ("SESSION_COOKIE_SECURE", "1"),
        ("SESSION_SAMESITE", "Strict"),
        ("SESSION_ALLOW_EPHEMERAL", "0"),
        ("SESSION_KEY_FILE", key_file.path_str()),
    ]);

    let error = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("short keys rejected");

    assert!(matches!(
        error,
        SessionConfigError::KeyTooShort { length: 16, .. }
    ));
}

#[rstest]
fn release_mode_accepts_a_full_configuration() {
    let key_file = KeyFile::with_len(64);
    let env = env_with(&[
        ("SESSION_COOKIE_SECURE", "1"),
        ("SESSION_SAMESITE", "Strict"),
        ("SESSION_ALLOW_EPHEMERAL", "0"),
        ("SESSION_KEY_FILE", key_file.path_str()),
    ]);

    let settings =
        session_settings_from_env(&env, BuildMode::Release).expect("valid configuration");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
fn missing_key_file_falls_back_in_debug() {
    let env = env_with(&[(
        "SESSION_KEY_FILE",
        "/nonexistent/session_key_for_these_tests",
    )]);

    let settings =
        session_settings_from_env(&env, BuildMode::Debug).expect("debug generates a key");

    assert!(settings.cookie_secure);
}

#[rstest]
fn missing_key_file_fails_in_release() {
    let env = env_with(&[
        ("SESSION_COOKIE_SECURE", "1"),
        ("SESSION_SAMESITE", "Strict"),
        ("SESSION_ALLOW_EPHEMERAL", "0"),
        (
            "SESSION_KEY_FILE",
            "/nonexistent/session_key_for_these_tests",
        ),
    ]);

    let error = session_settings_from_env(&env, BuildMode::Release)
        .err()
        .expect("unreadable key rejected");

    assert!(matches!(error, SessionConfigError::KeyRead { .. }));
}
