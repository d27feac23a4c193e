//! Session management for JobBoard API authentication.
//!
//! This module provides the [`SessionProvider`] interface consulted before
//! each outgoing request, and the [`Session`] type implementing it.

use chrono::{DateTime, Utc};
use std::fmt;

/// Supplies the login state and access token for outgoing API calls.
///
/// The HTTP layer consults the provider on every request: when
/// [`is_logged_in`](Self::is_logged_in) returns `true`, the token from
/// [`access_token`](Self::access_token) is attached as an
/// `Authorization: Bearer` header. When it returns `false`, no authorization
/// header is sent at all.
///
/// The trait is object-safe so tests and applications can substitute their
/// own providers (e.g., a token store shared with a login flow).
pub trait SessionProvider: Send + Sync + fmt::Debug {
    /// Returns `true` if a caller session currently exists.
    fn is_logged_in(&self) -> bool;

    /// Returns the access token for the current session, if any.
    fn access_token(&self) -> Option<String>;
}

/// Represents an authenticated session for JobBoard API calls.
///
/// Sessions hold the access token attached to outgoing requests. A session
/// with an expiration time in the past reports itself as logged out, so no
/// stale credential is ever sent.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use jobboard_api::{Session, SessionProvider};
///
/// let session = Session::new(
///     "session-id".to_string(),
///     "access-token".to_string(),
///     None, // no expiration
/// );
///
/// assert!(session.is_active());
/// assert!(!session.expired());
/// assert!(session.is_logged_in());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    /// Unique identifier for this session.
    pub id: String,

    /// The access token for API authentication.
    pub access_token: String,

    /// When this session expires, if applicable.
    pub expires: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a new session with the specified parameters.
    #[must_use]
    pub const fn new(id: String, access_token: String, expires: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            access_token,
            expires,
        }
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if this session is active (not expired and has access token).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

impl SessionProvider for Session {
    fn is_logged_in(&self) -> bool {
        self.is_active()
    }

    fn access_token(&self) -> Option<String> {
        if self.is_active() {
            Some(self.access_token.clone())
        } else {
            None
        }
    }
}

/// A session provider that is never logged in.
///
/// Use this for anonymous access: reads on a public job board do not require
/// a session, and no authorization header is attached.
///
/// # Example
///
/// ```rust
/// use jobboard_api::{Anonymous, SessionProvider};
///
/// let provider = Anonymous;
/// assert!(!provider.is_logged_in());
/// assert!(provider.access_token().is_none());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Anonymous;

impl SessionProvider for Anonymous {
    fn is_logged_in(&self) -> bool {
        false
    }

    fn access_token(&self) -> Option<String> {
        None
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
    assert_send_sync::<Anonymous>();
};
