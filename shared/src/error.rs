//! # Error Handling
//!
//! The controllers themselves never fail. Errors only come from the edges of the
//! page: parsing the injected content blob and talking to browser APIs.
//!
//! ## Usage Example
//!
//! ```rust
//! use shared::error::{Error, Result};
//!
//! fn require_target(found: bool) -> Result<()> {
//!     if !found {
//!         return Err(Error::Browser("reveal target is not an element".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_target(true).is_ok());
//! assert_eq!(
//!     require_target(false).unwrap_err().to_string(),
//!     "Browser error: reveal target is not an element"
//! );
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Landing page error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The content blob is not valid JSON or is missing a required field.
    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),

    /// A browser binding failed (listener registration, observer construction).
    #[error("Browser error: {0}")]
    Browser(String),
}

impl Error {
    /// Short message suitable for rendering in place of the page.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Content(_) => "This page could not be loaded.",
            Error::Browser(_) => "Your browser is missing a feature this page needs.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Content(_)));
        assert!(err.to_string().starts_with("Content error: "));
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = Error::Browser("IntersectionObserver is not a constructor".to_string());
        assert!(!err.user_message().contains("IntersectionObserver"));
    }
}
