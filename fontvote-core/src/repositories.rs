// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait FontRepo {
    fn create_font(&self, font: &NewFont) -> Result<Font>;

    fn get_font(&self, id: FontId) -> Result<Font>;

    /// All fonts ordered by id.
    fn all_fonts(&self) -> Result<Vec<Font>>;

    fn count_fonts(&self) -> Result<usize>;
}

pub trait TagRepo {
    /// Fails with [`Error::AlreadyExists`] if the name is taken.
    fn create_tag(&self, name: &str) -> Result<Tag>;

    /// All tags ordered by name.
    fn all_tags(&self) -> Result<Vec<Tag>>;

    fn count_tags(&self) -> Result<usize>;
}

pub trait FontTagRepo {
    fn all_font_tags(&self) -> Result<Vec<FontTag>>;

    fn load_tag_ids_of_font(&self, font_id: FontId) -> Result<Vec<TagId>>;

    fn add_font_tags(&self, font_id: FontId, tag_ids: &[TagId]) -> Result<usize>;

    fn remove_font_tags(&self, font_id: FontId, tag_ids: &[TagId]) -> Result<usize>;
}

pub trait VoteRepo {
    /// Records the vote and increments the matching counter
    /// of the font in a single atomic step.
    ///
    /// Fails with [`Error::AlreadyExists`] if the voter has
    /// already voted on this font and with [`Error::NotFound`]
    /// if the font does not exist.
    fn cast_vote(&self, font_id: FontId, voter: &VoterId, direction: VoteDirection)
        -> Result<()>;

    /// Deletes the vote and decrements the matching counter
    /// (floored at zero) in a single atomic step.
    ///
    /// Fails with [`Error::NotFound`] if there is no such vote.
    fn remove_vote(
        &self,
        font_id: FontId,
        voter: &VoterId,
        direction: VoteDirection,
    ) -> Result<()>;

    fn load_votes_of_voter(&self, voter: &VoterId) -> Result<Vec<Vote>>;
}
