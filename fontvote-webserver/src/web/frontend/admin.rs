use super::*;

#[derive(FromForm)]
pub struct NewTagForm<'r> {
    name: &'r str,
}

#[derive(FromForm)]
pub struct NewFontForm<'r> {
    name: &'r str,
    url: &'r str,
}

#[derive(FromForm)]
pub struct FontTagsForm {
    #[field(default = Vec::new())]
    tags: Vec<i64>,
}

fn console_redirect() -> Redirect {
    Redirect::to(uri!(get_admin(_)))
}

fn login_required() -> Flash<Redirect> {
    Flash::error(console_redirect(), "Please log in first.")
}

#[get("/admin?<edit>")]
pub fn get_admin(
    db: sqlite::Connections,
    admin: Option<Admin>,
    flash: Option<FlashMessage>,
    edit: Option<i64>,
) -> Result<Markup> {
    if admin.is_none() {
        return Ok(view::admin_login(flash));
    }
    let catalog = flows::load_catalog(&db)?;
    let editing = edit.map(FontId::new).and_then(|id| catalog.get(id));
    if editing.is_none() && edit.is_some() {
        debug!("Font {edit:?} not found for editing");
    }
    Ok(view::admin_console(&catalog, editing, flash))
}

#[post("/admin/tags", data = "<form>")]
pub fn post_tag(
    db: sqlite::Connections,
    admin: Option<Admin>,
    form: Form<NewTagForm>,
) -> Flash<Redirect> {
    if admin.is_none() {
        return login_required();
    }
    match flows::create_tag(&db, form.name) {
        Ok(tag) => Flash::success(console_redirect(), format!("Created tag '{}'.", tag.name)),
        Err(err) => Flash::error(console_redirect(), notice(&err)),
    }
}

#[post("/admin/fonts", data = "<form>")]
pub fn post_font(
    db: sqlite::Connections,
    admin: Option<Admin>,
    form: Form<NewFontForm>,
) -> Flash<Redirect> {
    if admin.is_none() {
        return login_required();
    }
    let params = usecases::NewFontParams {
        name: form.name.to_owned(),
        url: form.url.to_owned(),
    };
    match flows::add_font(&db, params) {
        Ok(font) => Flash::success(console_redirect(), format!("Added font '{}'.", font.name)),
        Err(err) => Flash::error(console_redirect(), notice(&err)),
    }
}

/// Replaces all tags of a font with the checked ones.
#[post("/admin/fonts/<id>/tags", data = "<form>")]
pub fn post_font_tags(
    db: sqlite::Connections,
    admin: Option<Admin>,
    id: i64,
    form: Form<FontTagsForm>,
) -> Flash<Redirect> {
    if admin.is_none() {
        return login_required();
    }
    let tag_ids: Vec<_> = form.tags.iter().copied().map(TagId::new).collect();
    match flows::replace_font_tags(&db, FontId::new(id), &tag_ids) {
        Ok(()) => Flash::success(console_redirect(), "The tags have been saved."),
        Err(err) => Flash::error(
            Redirect::to(uri!(get_admin(Some(id)))),
            notice(&err),
        ),
    }
}

#[get("/admin/fonts/<id>/preview")]
pub fn get_font_preview(db: sqlite::Connections, _admin: Admin, id: i64) -> Result<Markup> {
    let catalog = flows::load_catalog(&db)?;
    let font = catalog.get(FontId::new(id)).ok_or(RepoError::NotFound)?;
    Ok(view::font_preview(font))
}
