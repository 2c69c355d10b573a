use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::uri::Origin,
    post,
    request::FlashMessage,
    response::{content::RawCss, Flash, Redirect},
    routes, uri, FromForm, Route, State,
};
use time::{macros::format_description, OffsetDateTime};

use crate::{
    core::{prelude::*, theme, usecases},
    web::{
        api::{split_names, ApiError},
        guards::*,
        sqlite, Cfg,
    },
};
use fontvote_application::{
    error::{AppError, BError},
    prelude as flows,
};
use fontvote_core::{ledger::ActionState, repositories::Error as RepoError};

mod admin;
mod login;
mod view;


const MAIN_CSS: &str = include_str!("main.css");

type Result<T> = std::result::Result<T, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        post_vote,
        post_undo,
        get_event,
        get_main_css,
        admin::get_admin,
        admin::post_tag,
        admin::post_font,
        admin::post_font_tags,
        admin::get_font_preview,
        login::post_login,
        login::post_logout,
    ]
}

/// A user notice for a failed action.
fn notice(err: &AppError) -> String {
    match err {
        AppError::Business(BError::Parameter(err)) => err.to_string(),
        AppError::Business(BError::Repo(RepoError::NotFound)) => {
            "The font does not exist.".to_string()
        }
        err => {
            error!("Action failed: {err}");
            "Something went wrong. Please try again.".to_string()
        }
    }
}

fn index_uri(selected: &[&str]) -> Origin<'static> {
    if selected.is_empty() {
        uri!(get_index(_))
    } else {
        let tags = selected.join(",");
        uri!(get_index(Some(tags.as_str())))
    }
}

fn index_redirect(tags: Option<&str>) -> Redirect {
    let selected = tags.map(split_names).unwrap_or_default();
    Redirect::to(index_uri(&selected))
}

#[get("/?<tags>")]
pub fn get_index(
    db: sqlite::Connections,
    voter: Voter,
    cfg: &State<Cfg>,
    flash: Option<FlashMessage>,
    tags: Option<&str>,
) -> Result<Markup> {
    let catalog = flows::load_catalog(&db)?;
    let ledger = flows::load_ledger(&db, voter.id(), cfg.voting)?;
    let selected = tags.map(split_names).unwrap_or_default();
    Ok(view::index(
        &catalog,
        &ledger,
        &selected,
        cfg.top_count(),
        flash,
    ))
}

#[derive(FromForm)]
pub struct VoteForm<'r> {
    direction: &'r str,
    /// The tag filter of the page the vote was cast on.
    tags: Option<&'r str>,
}

#[post("/fonts/<id>/vote", data = "<form>")]
pub fn post_vote(
    db: sqlite::Connections,
    voter: Voter,
    cfg: &State<Cfg>,
    id: i64,
    form: Form<VoteForm>,
) -> Flash<Redirect> {
    let redirect = index_redirect(form.tags);
    let Ok(direction) = form.direction.parse::<VoteDirection>() else {
        return Flash::error(redirect, "Invalid vote.");
    };
    match flows::cast_vote(&db, voter.id(), cfg.voting, FontId::new(id), direction) {
        Ok(outcome) => Flash::success(
            redirect,
            format!("Your {direction}vote for {} was counted.", outcome.font.name),
        ),
        Err(err) => Flash::error(redirect, notice(&err)),
    }
}

#[derive(FromForm)]
pub struct UndoForm<'r> {
    tags: Option<&'r str>,
}

#[post("/fonts/<id>/undo", data = "<form>")]
pub fn post_undo(
    db: sqlite::Connections,
    voter: Voter,
    cfg: &State<Cfg>,
    id: i64,
    form: Form<UndoForm>,
) -> Flash<Redirect> {
    let redirect = index_redirect(form.tags);
    match flows::undo_vote(&db, voter.id(), cfg.voting, FontId::new(id)) {
        Ok(outcome) if outcome.action.state() == ActionState::Idle => Flash::success(
            redirect,
            format!("You have no vote for {}.", outcome.font.name),
        ),
        Ok(outcome) => Flash::success(
            redirect,
            format!("Your vote for {} was removed.", outcome.font.name),
        ),
        Err(err) => Flash::error(redirect, notice(&err)),
    }
}

#[get("/event")]
pub fn get_event(db: sqlite::Connections, origin: &Origin<'_>) -> Result<Markup> {
    let query = origin
        .query()
        .map(|q| q.as_str().to_owned())
        .unwrap_or_default();
    let settings = theme::parse_query(&query);
    let catalog = flows::load_catalog(&db)?;
    let date = OffsetDateTime::now_utc()
        .date()
        .format(format_description!("[month repr:long] [day padding:none], [year]"))
        .map_err(anyhow::Error::from)?;
    Ok(view::event(&settings, &catalog.by_upvotes(), &date))
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}
