use super::prelude::*;
use crate::repositories::Error as RepoError;

pub fn create_tag<R: TagRepo>(repo: &R, name: &str) -> Result<Tag> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyTagName);
    }
    let tag = repo.create_tag(name).map_err(|err| match err {
        RepoError::AlreadyExists => Error::TagExists,
        err => Error::Repo(err),
    })?;
    log::info!("Created tag '{}' ({})", tag.name, tag.id);
    Ok(tag)
}
