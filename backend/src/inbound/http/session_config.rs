//! Cookie-session settings read from the environment.
//!
//! Key material comes from `SESSION_SECRET`, or from the file named by
//! `SESSION_KEY_FILE`. Release builds insist on an explicit key of at least
//! [`SESSION_KEY_MIN_LEN`] bytes and an explicit `SESSION_COOKIE_SECURE`.
//! Debug builds warn and fall back to an ephemeral key and secure cookies.

use std::path::PathBuf;

use actix_web::cookie::Key;
use mockable::Env;
use tracing::warn;
use zeroize::Zeroizing;

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "mysession";
/// Minimum key length accepted in release builds.
pub const SESSION_KEY_MIN_LEN: usize = 64;

const SECRET_ENV: &str = "SESSION_SECRET";
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";

// `Key::derive_from` panics below this length.
const DERIVE_MIN_LEN: usize = 32;

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Tolerates defaults and warns.
    Debug,
    /// Requires explicit, valid settings.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use contacts::inbound::http::session_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Where the signing key came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeySource {
    /// `SESSION_SECRET`.
    Secret,
    /// The file at the given path.
    File(PathBuf),
    /// Generated at startup; sessions do not survive a restart.
    Ephemeral,
}

/// Validated session settings.
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// Origin of `key`.
    pub key_source: KeySource,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key material is too short.
    #[error("session key from {origin} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        origin: String,
        length: usize,
        min_len: usize,
    },
}

/// Build session settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use contacts::inbound::http::session_config::{
///     session_settings_from_env, BuildMode, KeySource,
/// };
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "SESSION_SECRET" => Some("k".repeat(64)),
///     "SESSION_COOKIE_SECURE" => Some("1".to_owned()),
///     _ => None,
/// });
///
/// let settings = session_settings_from_env(&env, BuildMode::Release).expect("valid settings");
/// assert!(settings.cookie_secure);
/// assert_eq!(settings.key_source, KeySource::Secret);
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = cookie_secure_from_env(env, mode)?;
    let (key, key_source) = session_key_from_env(env, mode)?;
    Ok(SessionSettings {
        key,
        cookie_secure,
        key_source,
    })
}

fn cookie_secure_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<bool, SessionConfigError> {
    let Some(value) = env.string(COOKIE_SECURE_ENV) else {
        if mode.is_debug() {
            warn!("SESSION_COOKIE_SECURE not set; defaulting to secure");
            return Ok(true);
        }
        return Err(SessionConfigError::MissingEnv {
            name: COOKIE_SECURE_ENV,
        });
    };
    match parse_bool(&value) {
        Some(flag) => Ok(flag),
        None if mode.is_debug() => {
            warn!(value = %value, "invalid SESSION_COOKIE_SECURE; defaulting to secure");
            Ok(true)
        }
        None => Err(SessionConfigError::InvalidEnv {
            name: COOKIE_SECURE_ENV,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn session_key_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<(Key, KeySource), SessionConfigError> {
    if let Some(secret) = env.string(SECRET_ENV).filter(|s| !s.is_empty()) {
        let secret = Zeroizing::new(secret);
        return key_from_material(secret.as_bytes(), KeySource::Secret, mode);
    }

    if let Some(path) = env.string(KEY_FILE_ENV).filter(|s| !s.is_empty()) {
        let path = PathBuf::from(path);
        return match std::fs::read(&path) {
            Ok(bytes) => {
                let bytes = Zeroizing::new(bytes);
                key_from_material(&bytes, KeySource::File(path), mode)
            }
            Err(error) if mode.is_debug() => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "session key file unreadable; using temporary key (dev only)"
                );
                Ok(ephemeral())
            }
            Err(error) => Err(SessionConfigError::KeyRead {
                path,
                source: error,
            }),
        };
    }

    if mode.is_debug() {
        warn!("no session key configured; using temporary key (dev only)");
        return Ok(ephemeral());
    }
    Err(SessionConfigError::MissingEnv { name: SECRET_ENV })
}

fn key_from_material(
    material: &[u8],
    source: KeySource,
    mode: BuildMode,
) -> Result<(Key, KeySource), SessionConfigError> {
    let length = material.len();
    let min_len = match mode {
        BuildMode::Release => SESSION_KEY_MIN_LEN,
        BuildMode::Debug => DERIVE_MIN_LEN,
    };
    if length >= min_len {
        return Ok((Key::derive_from(material), source));
    }
    let origin = describe(&source);
    if mode.is_debug() {
        warn!(%origin, length, "session key too short; using temporary key (dev only)");
        return Ok(ephemeral());
    }
    Err(SessionConfigError::KeyTooShort {
        origin,
        length,
        min_len,
    })
}

fn describe(source: &KeySource) -> String {
    match source {
        KeySource::Secret => SECRET_ENV.to_owned(),
        KeySource::File(path) => path.display().to_string(),
        KeySource::Ephemeral => "ephemeral".to_owned(),
    }
}

fn ephemeral() -> (Key, KeySource) {
    (Key::generate(), KeySource::Ephemeral)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
