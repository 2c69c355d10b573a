mod add_font;
mod create_tag;
mod load_catalog;
mod replace_font_tags;
mod vote;

pub mod prelude {
    pub use super::{add_font::*, create_tag::*, load_catalog::*, replace_font_tags::*, vote::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use fontvote_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use fontvote_db_sqlite::Connections;
}
