// Rust guideline compliant 2026-10-14

//! Admin sign-in and session handling.
//!
//! A single admin account is configured by email and the SHA-256 digest of
//! its password. Signing in writes a session file under `.folio/`; mutating
//! commands require a session that has not expired.

use crate::error::{AppError, Result};
use crate::site::SiteContext;
use chrono::{DateTime, Duration, Utc};
use folio_core::Config;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Signed-in admin email.
    pub user: String,
    /// Opaque session token.
    pub token: String,
    /// When the session was created.
    pub issued_at: DateTime<Utc>,
    /// When the session stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Returns true if the session is past its expiry at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Returns the lowercase SHA-256 hex digest of a password.
#[must_use]
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Signs the admin in and stores the session.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` if no admin is configured or the
/// credentials do not match, or an IO error if the session cannot be saved.
pub fn sign_in(site: &SiteContext, config: &Config, email: &str, password: &str) -> Result<Session> {
    sign_in_at(site, config, email, password, Utc::now())
}

/// Signs the admin in as of `now`.
///
/// # Errors
///
/// See [`sign_in`].
pub fn sign_in_at(
    site: &SiteContext,
    config: &Config,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<Session> {
    if !config.has_admin() {
        return Err(AppError::Unauthorized(
            "No admin account configured. Set admin_email and admin_password_sha256.".to_string(),
        ));
    }

    let email = email.trim();
    let digest = hash_password(password);
    if !email.eq_ignore_ascii_case(&config.admin_email)
        || !digest.eq_ignore_ascii_case(&config.admin_password_sha256)
    {
        tracing::warn!(email, "Rejected sign-in");
        return Err(AppError::Unauthorized("Invalid email or password".to_string()));
    }

    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(digest.as_bytes());
    hasher.update(now.timestamp_nanos_opt().unwrap_or_default().to_le_bytes());

    let session = Session {
        user: config.admin_email.clone(),
        token: format!("{:x}", hasher.finalize()),
        issued_at: now,
        expires_at: now + Duration::hours(i64::from(config.session_ttl_hours)),
    };

    std::fs::write(site.session_path(), serde_json::to_string_pretty(&session)?)?;
    tracing::info!(user = %session.user, "Signed in");
    Ok(session)
}

/// Removes the stored session.
///
/// # Returns
///
/// `true` if a session was removed.
///
/// # Errors
///
/// Returns an error if the session file exists but cannot be removed.
pub fn sign_out(site: &SiteContext) -> Result<bool> {
    let path = site.session_path();
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(path)?;
    tracing::info!("Signed out");
    Ok(true)
}

/// Returns the stored session, expired or not.
///
/// # Errors
///
/// Returns an error if the session file cannot be read or parsed.
pub fn current_user(site: &SiteContext) -> Result<Option<Session>> {
    let path = site.session_path();
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Returns the stored session if it is still valid.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` when no session exists and
/// `AppError::SessionExpired` when it has expired.
pub fn require_session(site: &SiteContext) -> Result<Session> {
    require_session_at(site, Utc::now())
}

/// Returns the stored session if it is still valid at `now`.
///
/// # Errors
///
/// See [`require_session`].
pub fn require_session_at(site: &SiteContext, now: DateTime<Utc>) -> Result<Session> {
    let session = current_user(site)?.ok_or_else(|| {
        AppError::Unauthorized("Not signed in. Run 'folio login' first.".to_string())
    })?;
    if session.is_expired_at(now) {
        return Err(AppError::SessionExpired);
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn setup() -> (TempDir, SiteContext, Config) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            admin_email: "owner@example.com".to_string(),
            admin_password_sha256: hash_password("hunter2"),
            session_ttl_hours: 2,
            ..Config::default()
        };
        let (site, _) = SiteContext::init(temp_dir.path(), &config).unwrap();
        (temp_dir, site, config)
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_hash_password_is_sha256_hex() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sign_in_and_out() {
        let (_temp_dir, site, config) = setup();
        let session = sign_in_at(&site, &config, " Owner@Example.com ", "hunter2", noon()).unwrap();
        assert_eq!(session.user, "owner@example.com");
        assert_eq!(session.expires_at, noon() + Duration::hours(2));
        assert_eq!(current_user(&site).unwrap(), Some(session));

        assert!(sign_out(&site).unwrap());
        assert!(!sign_out(&site).unwrap());
        assert_eq!(current_user(&site).unwrap(), None);
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let (_temp_dir, site, config) = setup();
        let err = sign_in_at(&site, &config, "owner@example.com", "wrong", noon()).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
        assert!(!site.session_path().exists());
    }

    #[test]
    fn test_unconfigured_admin_is_rejected() {
        let (_temp_dir, site, _) = setup();
        let err = sign_in_at(&site, &Config::default(), "a@b.c", "x", noon()).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_require_session() {
        let (_temp_dir, site, config) = setup();
        assert!(matches!(
            require_session_at(&site, noon()),
            Err(AppError::Unauthorized(_))
        ));

        sign_in_at(&site, &config, "owner@example.com", "hunter2", noon()).unwrap();
        assert!(require_session_at(&site, noon() + Duration::minutes(90)).is_ok());
        assert!(matches!(
            require_session_at(&site, noon() + Duration::hours(2)),
            Err(AppError::SessionExpired)
        ));
    }
}
