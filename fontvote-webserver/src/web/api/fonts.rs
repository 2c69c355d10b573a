use super::*;

/// The ranked catalog, optionally filtered by tag names.
#[get("/fonts?<tags>")]
pub fn get_fonts(
    db: sqlite::Connections,
    voter: Voter,
    cfg: &State<Cfg>,
    tags: Option<&str>,
) -> Result<Vec<json::Font>> {
    let catalog = flows::load_catalog(&db)?;
    let ledger = flows::load_ledger(&db, voter.id(), cfg.voting)?;
    let selected = tags.map(split_names).unwrap_or_default();
    let fonts = catalog
        .filter_by_tags(selected.as_slice())
        .into_iter()
        .map(|font| to_json::font(font, Some(&ledger)))
        .collect();
    Ok(Json(fonts))
}

#[get("/fonts/<id>")]
pub fn get_font(
    db: sqlite::Connections,
    voter: Voter,
    cfg: &State<Cfg>,
    id: i64,
) -> Result<json::Font> {
    let catalog = flows::load_catalog(&db)?;
    let font = catalog.get(FontId::new(id)).ok_or(RepoError::NotFound)?;
    let ledger = flows::load_ledger(&db, voter.id(), cfg.voting)?;
    Ok(Json(to_json::font(font, Some(&ledger))))
}

#[post("/fonts", format = "application/json", data = "<new_font>")]
pub fn post_font(
    db: sqlite::Connections,
    admin: AdminResult,
    new_font: JsonResult<json::NewFont>,
) -> Result<json::Font> {
    admin?;
    let params = from_json::new_font_params(new_font?.into_inner());
    let font = flows::add_font(&db, params)?;
    Ok(Json(font.into()))
}

/// Replaces all tags of a font.
#[put("/fonts/<id>/tags", format = "application/json", data = "<tag_ids>")]
pub fn put_font_tags(
    db: sqlite::Connections,
    admin: AdminResult,
    id: i64,
    tag_ids: JsonResult<Vec<i64>>,
) -> StatusResult {
    admin?;
    let tag_ids: Vec<_> = tag_ids?.into_inner().into_iter().map(TagId::new).collect();
    flows::replace_font_tags(&db, FontId::new(id), &tag_ids)?;
    Ok(Status::NoContent)
}
