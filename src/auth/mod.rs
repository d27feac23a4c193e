//! Authentication types for the JobBoard API SDK.
//!
//! This module provides the session types used to decide whether an
//! authorization credential is attached to outgoing API calls.
//!
//! # Overview
//!
//! - [`SessionProvider`]: The interface the HTTP layer consults before each
//!   request to determine login state and obtain the access token
//! - [`Session`]: A concrete token-holding session with optional expiration
//! - [`Anonymous`]: A provider that is never logged in
//!
//! The SDK does not implement any authentication protocol. Access tokens are
//! obtained elsewhere (e.g., a login endpoint) and handed to the session; the
//! SDK only attaches them as a bearer credential when a session exists.
//!
//! # Example
//!
//! ```rust
//! use jobboard_api::{Session, SessionProvider};
//!
//! let session = Session::new("session-id".to_string(), "access-token".to_string(), None);
//!
//! assert!(session.is_logged_in());
//! assert_eq!(session.access_token(), Some("access-token".to_string()));
//! ```

pub mod session;

pub use session::{Anonymous, Session, SessionProvider};
