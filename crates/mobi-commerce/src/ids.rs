//! Newtype identifiers for catalog entities.
//!
//! Using newtypes prevents accidentally mixing up different identifier
//! kinds, e.g., passing a coupon code where a product id is expected.
//! Catalog ids are externally supplied and stable; nothing here mints
//! new ones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A stable string identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CouponCode);

impl CouponCode {
    /// Check a user-submitted code against this one.
    ///
    /// Codes match case-insensitively and ignore surrounding whitespace,
    /// so "srb500 " matches "SRB500".
    pub fn matches(&self, submitted: &str) -> bool {
        self.0.eq_ignore_ascii_case(submitted.trim())
    }
}
