//! # Identity Newtypes
//!
//! Backend-assigned integer identifiers, one distinct type per entity
//! family. The content backend never hands out zero or negative ids; the
//! value `0` is reserved as the "no record" sentinel used by empty default
//! records (see `AuthorRef::default()` in the client crate).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! backend_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw backend identifier.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Parse a signed value as it appears in loosely-typed JSON.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::InvalidId`] for zero or negative input.
            pub fn from_signed(value: i64) -> Result<Self, ValidationError> {
                u64::try_from(value)
                    .ok()
                    .filter(|v| *v > 0)
                    .map(Self)
                    .ok_or(ValidationError::InvalidId { kind: $kind, value })
            }

            /// Access the underlying integer.
            pub const fn get(self) -> u64 {
                self.0
            }

            /// True for the zero sentinel carried by empty default records.
            pub const fn is_unset(self) -> bool {
                self.0 == 0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

backend_id!(
    /// Identifier of a content entity (post, page, or custom post type).
    ContentId,
    "content"
);

backend_id!(
    /// Identifier of a taxonomy term (category or tag).
    TermId,
    "term"
);

backend_id!(
    /// Identifier of a media attachment.
    MediaId,
    "media"
);

backend_id!(
    /// Identifier of an author (backend user).
    AuthorId,
    "author"
);
