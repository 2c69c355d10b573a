use std::time::Duration;

use rocket::{
    self,
    http::{Cookie, CookieJar, SameSite, Status},
    request::{FromRequest, Outcome, Request},
};
use time::OffsetDateTime;

use crate::core::{prelude::*, usecases};

pub const COOKIE_VOTER_KEY: &str = "fontvote-voter";
pub const COOKIE_ADMIN_KEY: &str = "fontvote-admin";

/// The anonymous identity of a visitor.
///
/// If the request carries no valid voter cookie a new
/// identity is generated and stored in the response.
#[derive(Debug, Clone, Copy)]
pub struct Voter(VoterId);

impl Voter {
    pub fn id(&self) -> VoterId {
        self.0
    }

    fn id_from_cookie(cookies: &CookieJar) -> Option<VoterId> {
        cookies
            .get(COOKIE_VOTER_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Voter {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cookies = request.cookies();
        if let Some(id) = Self::id_from_cookie(cookies) {
            return Outcome::Success(Self(id));
        }
        let id = VoterId::new();
        debug!("New voter {id}");
        cookies.add(
            Cookie::build((COOKIE_VOTER_KEY, id.to_string()))
                .http_only(true)
                .same_site(SameSite::Lax)
                .permanent(),
        );
        Outcome::Success(Self(id))
    }
}

/// A request with a valid admin session.
///
/// JSON handlers take `Result<Admin, usecases::Error>` to answer
/// with an error body instead of the default catcher.
#[derive(Debug)]
pub struct Admin;

impl Admin {
    fn session_expiry_from_cookie(request: &Request) -> Option<i64> {
        request
            .cookies()
            .get_private(COOKIE_ADMIN_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Admin {
    type Error = usecases::Error;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match Self::session_expiry_from_cookie(request) {
            Some(expires_at) if OffsetDateTime::now_utc().unix_timestamp() < expires_at => {
                Outcome::Success(Admin)
            }
            Some(_) => {
                debug!("Admin session expired");
                Outcome::Error((Status::Unauthorized, usecases::Error::Unauthorized))
            }
            None => Outcome::Error((Status::Unauthorized, usecases::Error::Unauthorized)),
        }
    }
}

pub fn start_admin_session(cookies: &CookieJar<'_>, ttl: Duration) {
    let expires_at = OffsetDateTime::now_utc() + ttl;
    cookies.add_private(
        Cookie::build((COOKIE_ADMIN_KEY, expires_at.unix_timestamp().to_string()))
            .http_only(true)
            .same_site(SameSite::Lax),
    );
}

pub fn end_admin_session(cookies: &CookieJar<'_>) {
    cookies.remove_private(COOKIE_ADMIN_KEY);
}

#[derive(Debug)]
pub struct Version(pub &'static str);
