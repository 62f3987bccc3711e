// Rust guideline compliant 2026-10-14

//! Implementation of the `passwd`, `login`, `logout` and `whoami` commands.

use super::{open_site, print_json};
use crate::terminal::{print_info, print_success, print_warning};
use anyhow::Result;
use chrono::Utc;
use folio_app::{current_user, hash_password, sign_in, sign_out, AppError, SuccessEnvelope};
use serde_json::json;
use std::path::Path;

/// Environment variable read when `--password` is not given.
pub const PASSWORD_ENV: &str = "FOLIO_PASSWORD";

/// Prints the digest to store as `admin_password_sha256`.
pub fn passwd(password: &str) {
    println!("{}", hash_password(password));
}

/// Executes `folio login`.
///
/// # Errors
///
/// Returns an error if no password is available or the credentials are
/// rejected.
pub fn login(root: Option<&Path>, email: &str, password: Option<String>, json: bool) -> Result<()> {
    let password = password
        .or_else(|| std::env::var(PASSWORD_ENV).ok())
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Password required. Pass --password or set {}.",
                PASSWORD_ENV
            ))
        })?;

    let (site, config) = open_site(root)?;
    let session = sign_in(&site, &config, email, &password)?;

    if json {
        return print_json(&SuccessEnvelope::new(session));
    }
    print_success(&format!(
        "Signed in as {} until {}",
        session.user,
        session.expires_at.format("%Y-%m-%d %H:%M UTC")
    ));
    Ok(())
}

/// Executes `folio logout`.
///
/// # Errors
///
/// Returns an error if the session file cannot be removed.
pub fn logout(root: Option<&Path>, json: bool) -> Result<()> {
    let (site, _) = open_site(root)?;
    let removed = sign_out(&site)?;

    if json {
        return print_json(&SuccessEnvelope::new(json!({ "signed_out": removed })));
    }
    if removed {
        print_success("Signed out");
    } else {
        print_info("No active session");
    }
    Ok(())
}

/// Executes `folio whoami`.
///
/// # Errors
///
/// Returns an error if the session file cannot be read.
pub fn whoami(root: Option<&Path>, json: bool) -> Result<()> {
    let (site, _) = open_site(root)?;
    let session = current_user(&site)?;

    if json {
        let expired = session.as_ref().map(|s| s.is_expired_at(Utc::now()));
        return print_json(&json!({ "session": session, "expired": expired }));
    }

    match session {
        None => print_info("Not signed in"),
        Some(session) if session.is_expired_at(Utc::now()) => {
            print_warning(&format!("Session for {} has expired", session.user));
        }
        Some(session) => println!(
            "{} (expires {})",
            session.user,
            session.expires_at.format("%Y-%m-%d %H:%M UTC")
        ),
    }
    Ok(())
}
