use super::*;

#[post("/admin/login", format = "application/json", data = "<credentials>")]
pub fn post_login(
    cfg: &State<Cfg>,
    cookies: &CookieJar<'_>,
    credentials: JsonResult<json::Credentials>,
) -> Result<()> {
    let json::Credentials { password } = credentials?.into_inner();
    usecases::authorize_admin(&cfg.admin_password, &password)?;
    start_admin_session(cookies, cfg.admin_session_ttl);
    Ok(Json(()))
}

#[post("/admin/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<()> {
    end_admin_session(cookies);
    Json(())
}
