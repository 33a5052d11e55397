//! # Portal (sign-in and registration host)
//!
//! `portal` serves the `portal-web` frontend bundle. The frontend does the real
//! work in the browser: it validates the registration form, gates submission on a
//! CAPTCHA challenge, posts to `/api/register`, and opens the external login
//! provider in a popup.
//!
//! This binary only hosts static assets with a single-page-app fallback,
//! publishes the runtime configuration the frontend reads from
//! `window.PORTAL_CONFIG`, and answers `/health`. The `/api/register` endpoint
//! belongs to a separate service.

pub mod cli;
pub mod portal;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
