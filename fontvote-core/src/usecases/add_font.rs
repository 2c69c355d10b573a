use super::prelude::*;
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone)]
pub struct NewFontParams {
    pub name: String,
    pub url: String,
}

pub fn add_font<R: FontRepo>(repo: &R, params: NewFontParams) -> Result<Font> {
    let name = params.name.trim();
    if name.is_empty() {
        return Err(Error::FontName);
    }
    let url: Url = params.url.trim().parse()?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Url);
    }
    let new_font = NewFont {
        name: name.to_owned(),
        url,
    };
    let font = repo.create_font(&new_font).map_err(|err| match err {
        RepoError::AlreadyExists => Error::FontExists,
        err => Error::Repo(err),
    })?;
    log::info!("Added font '{}' ({})", font.name, font.id);
    Ok(font)
}
