//! Session cookie settings and signing-key loading.
//!
//! Release builds refuse to start without a readable key of at least
//! [`SESSION_KEY_MIN_LEN`] bytes; debug builds fall back to a random key when
//! the file is missing. A key file shorter than [`DERIVE_KEY_MIN_LEN`] is
//! rejected in every build mode.

use std::path::{Path, PathBuf};

use actix_web::cookie::{Key, SameSite};
use tracing::warn;
use zeroize::Zeroize;

/// Minimum key material accepted in release builds.
pub const SESSION_KEY_MIN_LEN: usize = 64;

/// Minimum key material `Key::derive_from` accepts.
pub const DERIVE_KEY_MIN_LEN: usize = 32;

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing key and warn.
    Debug,
    /// Release builds require a real key unless ephemeral keys are allowed.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
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

    fn key_min_len(self) -> usize {
        if self.is_debug() {
            DERIVE_KEY_MIN_LEN
        } else {
            SESSION_KEY_MIN_LEN
        }
    }
}

/// Raw inputs taken from application settings.
#[derive(Debug, Clone)]
pub struct SessionInputs<'a> {
    /// File holding the session key material.
    pub key_file: &'a Path,
    /// Permit a random key in release builds when the file is unreadable.
    pub allow_ephemeral: bool,
    /// Mark session cookies `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

/// Validated session settings for the cookie middleware.
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        /// Configured key path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The key file is too short for the build mode.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        /// Configured key path.
        path: PathBuf,
        /// Bytes read from the file.
        length: usize,
        /// Bytes required.
        min_len: usize,
    },
    /// `SameSite=None` requires secure cookies in release builds.
    #[error("session_same_site=none requires cookie_secure=true")]
    InsecureSameSiteNone,
}

/// Validate session inputs and load the signing key.
///
/// # Examples
/// ```
/// use actix_web::cookie::SameSite;
/// use kyc_portal::inbound::http::session_config::{BuildMode, SessionInputs, session_settings};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let key_path = std::env::temp_dir().join("kyc_portal_session_key_example");
/// std::fs::write(&key_path, vec![b'k'; 64])?;
///
/// let settings = session_settings(
///     &SessionInputs {
///         key_file: &key_path,
///         allow_ephemeral: false,
///         cookie_secure: true,
///         same_site: SameSite::Strict,
///     },
///     BuildMode::Release,
/// )?;
/// assert!(settings.cookie_secure);
///
/// std::fs::remove_file(&key_path)?;
/// # Ok(())
/// # }
/// ```
pub fn session_settings(
    inputs: &SessionInputs<'_>,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    if inputs.same_site == SameSite::None && !inputs.cookie_secure {
        if mode.is_debug() {
            warn!("session_same_site=none without secure cookies; browsers may reject them");
        } else {
            return Err(SessionConfigError::InsecureSameSiteNone);
        }
    }
    let key = load_key(inputs.key_file, mode, inputs.allow_ephemeral)?;
    Ok(SessionSettings {
        key,
        cookie_secure: inputs.cookie_secure,
        same_site: inputs.same_site,
    })
}

fn load_key(path: &Path, mode: BuildMode, allow_ephemeral: bool) -> Result<Key, SessionConfigError> {
    match std::fs::read(path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            let min_len = mode.key_min_len();
            if length < min_len {
                bytes.zeroize();
                return Err(SessionConfigError::KeyTooShort {
                    path: path.to_path_buf(),
                    length,
                    min_len,
                });
            }
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Err(error) => {
            if mode.is_debug() || allow_ephemeral {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "using temporary session key (dev only)"
                );
                Ok(Key::generate())
            } else {
                Err(SessionConfigError::KeyRead {
                    path: path.to_path_buf(),
                    source: error,
                })
            }
        }
    }
}
