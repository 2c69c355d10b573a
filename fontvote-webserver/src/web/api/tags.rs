use super::*;

#[get("/tags")]
pub fn get_tags(db: sqlite::Connections) -> Result<Vec<json::Tag>> {
    let tags = db.shared()?.all_tags()?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

#[post("/tags", format = "application/json", data = "<new_tag>")]
pub fn post_tag(
    db: sqlite::Connections,
    admin: AdminResult,
    new_tag: JsonResult<json::NewTag>,
) -> Result<json::Tag> {
    admin?;
    let json::NewTag { name } = new_tag?.into_inner();
    let tag = flows::create_tag(&db, &name)?;
    Ok(Json(tag.into()))
}
