use super::prelude::*;
use crate::catalog::Catalog;

pub fn load_catalog<R>(repo: &R) -> Result<Catalog>
where
    R: FontRepo + TagRepo + FontTagRepo,
{
    let fonts = repo.all_fonts()?;
    let tags = repo.all_tags()?;
    let font_tags = repo.all_font_tags()?;
    log::debug!(
        "Loaded {} fonts, {} tags and {} tag assignments",
        fonts.len(),
        tags.len(),
        font_tags.len()
    );
    Ok(Catalog::hydrate(fonts, tags, font_tags))
}
