use thiserror::Error;

use crate::{ledger::Rejection, repositories};

#[derive(Debug, Error)]
pub enum Error {
    #[error("You have already voted for this font")]
    AlreadyVoted,
    #[error("You have not voted for this font")]
    NotVoted,
    #[error("You have no votes left")]
    QuotaExceeded,
    #[error("Voting is currently disabled")]
    VotingDisabled,
    #[error("The tag name must not be empty")]
    EmptyTagName,
    #[error("The tag already exists")]
    TagExists,
    #[error("The font name is invalid")]
    FontName,
    #[error("The font already exists")]
    FontExists,
    #[error("Invalid URL")]
    Url,
    #[error("Unknown tag")]
    UnknownTag,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<Rejection> for Error {
    fn from(from: Rejection) -> Self {
        match from {
            Rejection::VotingDisabled => Self::VotingDisabled,
            Rejection::AlreadyVoted => Self::AlreadyVoted,
            Rejection::QuotaExceeded => Self::QuotaExceeded,
        }
    }
}

impl From<fontvote_entities::url::ParseError> for Error {
    fn from(_: fontvote_entities::url::ParseError) -> Self {
        Self::Url
    }
}
