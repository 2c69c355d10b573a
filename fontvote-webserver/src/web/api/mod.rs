use std::{fmt::Display, result};

use fontvote_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::{CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::{sqlite, Cfg},
};
use fontvote_application::prelude as flows;

mod admin;
mod error;
mod fonts;
mod tags;
mod util;
mod votes;

pub use self::error::Error as ApiError;
use self::error::RepoError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;
type AdminResult = result::Result<Admin, usecases::Error>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   fonts   --- //
        fonts::get_fonts,
        fonts::get_font,
        fonts::post_font,
        fonts::put_font_tags,
        // ---   tags   --- //
        tags::get_tags,
        tags::post_tag,
        // ---   votes   --- //
        votes::get_votes,
        votes::post_vote,
        votes::delete_vote,
        // ---   admin   --- //
        admin::post_login,
        admin::post_logout,
        util::get_version,
    ]
}

/// Splits a comma separated list and drops empty items.
pub fn split_names(names: &str) -> Vec<&str> {
    names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

#[cfg(test)]
mod split_tests {
    use super::split_names;

    #[test]
    fn split_comma_separated_names() {
        assert_eq!(split_names("Serif, Display"), vec!["Serif", "Display"]);
        assert_eq!(split_names(",,Sans,"), vec!["Sans"]);
        assert!(split_names("").is_empty());
    }
}
