#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # fontvote-entities
//!
//! Reusable, agnostic domain entities for fontvote.
//!
//! The entities only contain generic functionality that does not reveal
//! any application-specific business logic.

pub mod font;
pub mod tag;
pub mod theme;
pub mod time;
pub mod vote;
pub mod voter;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
