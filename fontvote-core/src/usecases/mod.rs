mod add_font;
mod authorize_admin;
mod create_tag;
mod error;
mod load_catalog;
mod replace_font_tags;
mod vote;

#[cfg(test)]
pub mod tests;

pub use self::{
    add_font::*, authorize_admin::*, create_tag::*, error::Error, load_catalog::*,
    replace_font_tags::*, vote::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
