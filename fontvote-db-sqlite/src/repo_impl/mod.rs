use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use fontvote_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod font;
mod font_tag;
mod tag;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_err() -> repo::Error {
    repo::Error::Other(anyhow!("Write access on a read-only database connection"))
}

fn load_count(count: i64) -> VoteCount {
    debug_assert!(count >= 0);
    count.max(0) as VoteCount
}

fn load_font(entity: models::FontEntity) -> Result<Font> {
    let models::FontEntity {
        id,
        name,
        url,
        upvotes,
        downvotes,
    } = entity;
    let url = url
        .parse()
        .map_err(|err| anyhow!("Invalid stylesheet URL '{url}' of font {id}: {err}"))?;
    Ok(Font {
        id: id.into(),
        name,
        url,
        upvotes: load_count(upvotes),
        downvotes: load_count(downvotes),
    })
}

fn load_tag(entity: models::TagEntity) -> Tag {
    let models::TagEntity { id, name } = entity;
    Tag {
        id: id.into(),
        name,
    }
}

fn load_vote(entity: models::VoteEntity) -> Result<Vote> {
    let models::VoteEntity {
        font_id,
        user_id,
        vote_type,
        created_at,
    } = entity;
    let voter = user_id
        .parse()
        .map_err(|err| anyhow!("Invalid voter id '{user_id}': {err}"))?;
    let direction = vote_type
        .parse()
        .map_err(|_| anyhow!("Invalid vote type '{vote_type}'"))?;
    Ok(Vote {
        font_id: font_id.into(),
        voter,
        direction,
        created_at: Timestamp::from_seconds(created_at),
    })
}
