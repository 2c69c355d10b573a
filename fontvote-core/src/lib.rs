//! # fontvote-core
//!
//! Business logic of fontvote: the store contract, the
//! vote ledger and catalog view-models and the use cases
//! that combine them.

pub mod catalog;
pub mod ledger;
pub mod repositories;
pub mod theme;
pub mod usecases;

pub mod entities {
    pub use fontvote_entities::{
        font::*, tag::*, theme::*, time::*, url::Url, vote::*, voter::*,
    };
}
