use rocket::{
    self,
    form::Form,
    http::CookieJar,
    post,
    response::{Flash, Redirect},
    uri, FromForm, State,
};

use super::super::guards::*;

use crate::{core::usecases, web::Cfg};

#[derive(FromForm)]
pub struct LoginCredentials<'r> {
    pub(crate) password: &'r str,
}

#[allow(clippy::result_large_err)]
#[post("/admin/login", data = "<credentials>")]
pub fn post_login(
    cfg: &State<Cfg>,
    credentials: Form<LoginCredentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    match usecases::authorize_admin(&cfg.admin_password, credentials.password) {
        Err(_) => Err(Flash::error(
            Redirect::to(uri!(super::admin::get_admin(_))),
            "Invalid password.",
        )),
        Ok(()) => {
            start_admin_session(cookies, cfg.admin_session_ttl);
            Ok(Redirect::to(uri!(super::admin::get_admin(_))))
        }
    }
}

#[post("/admin/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    end_admin_session(cookies);
    Flash::success(
        Redirect::to(uri!(super::get_index(_))),
        "You have successfully logged out.",
    )
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::web::{self, sqlite::Connections, tests::prelude::*};

    fn setup() -> (Client, Connections) {
        web::tests::rocket_test_setup(vec![("/", super::super::routes())])
    }

    fn admin_cookie(response: &LocalResponse) -> Option<Cookie<'static>> {
        let cookie = response
            .headers()
            .get("Set-Cookie")
            .find(|v| v.starts_with(COOKIE_ADMIN_KEY))
            .and_then(|val| Cookie::parse_encoded(val).ok());
        cookie.map(|c| c.into_owned())
    }

    #[test]
    fn get_login_form() {
        let (client, _) = setup();
        let res = client.get("/admin").dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert!(admin_cookie(&res).is_none());
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("action=\"/admin/login\""));
    }

    #[test]
    fn post_login_fails() {
        let (client, _) = setup();
        let res = client
            .post("/admin/login")
            .header(ContentType::Form)
            .body("password=invalid")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/admin"));
        assert!(admin_cookie(&res).is_none());
        let body_str = client.get("/admin").dispatch().into_string().unwrap();
        assert!(body_str.contains("Invalid password."));
    }

    #[test]
    fn post_login_success() {
        let (client, _) = setup();
        let res = client
            .post("/admin/login")
            .header(ContentType::Form)
            .body(format!("password={ADMIN_PASSWORD}"))
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/admin"));
        assert!(admin_cookie(&res).is_some());
        let body_str = client.get("/admin").dispatch().into_string().unwrap();
        assert!(body_str.contains("action=\"/admin/tags\""));
    }

    #[test]
    fn empty_password_never_logs_in() {
        let mut cfg = test_cfg();
        cfg.admin_password = String::new();
        let (client, _) =
            web::tests::rocket_test_setup_with_cfg(vec![("/", super::super::routes())], cfg);
        let res = client
            .post("/admin/login")
            .header(ContentType::Form)
            .body("password=")
            .dispatch();
        assert!(admin_cookie(&res).is_none());
    }

    #[test]
    fn logout() {
        let (client, _) = setup();
        client
            .post("/admin/login")
            .header(ContentType::Form)
            .body(format!("password={ADMIN_PASSWORD}"))
            .dispatch();
        let res = client.post("/admin/logout").dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/"));
        let body_str = client.get("/admin").dispatch().into_string().unwrap();
        assert!(body_str.contains("action=\"/admin/login\""));
    }
}
