use maud::{html, Markup};
use rocket::request::FlashMessage;

use crate::core::{catalog::sections, prelude::*};

mod admin;
mod event;
mod page;
mod preview;

pub use admin::*;
pub use event::*;
use page::*;
pub use preview::*;

/// Loads the stylesheets of all given fonts.
///
/// Until a stylesheet is loaded, or if it never is,
/// the text falls back to the system font.
fn font_stylesheets<'a>(fonts: impl IntoIterator<Item = &'a Font>) -> Markup {
    html! {
        @for font in fonts {
            link rel="stylesheet" href=(font.url.as_str());
        }
    }
}

fn font_family_style(font: &Font) -> String {
    format!("font-family: {}", font.css_family())
}

fn filter_href(selected: &[&str]) -> String {
    super::index_uri(selected).to_string()
}

pub fn index(
    catalog: &Catalog,
    ledger: &VoteLedger,
    selected: &[&str],
    top_count: usize,
    flash: Option<FlashMessage>,
) -> Markup {
    let filter = selected.join(",");
    let ranked = catalog.filter_by_tags(selected);
    let is_empty = ranked.is_empty();
    let sections = sections(ranked, top_count);
    page(
        "Font Vote",
        flash,
        Some(font_stylesheets(catalog.fonts().iter().map(|f| &f.font))),
        html! {
            main class="voting" {
                h1 { "Vote for the fonts you like" }
                (quota_info(ledger))
                (tag_filter(catalog.tags(), selected))
                @if is_empty {
                    p class="empty" { "No fonts match the selected tags." }
                }
                @if !sections.top.is_empty() {
                    section class="top" {
                        h2 { "Top " (top_count) }
                        div class="fonts" {
                            @for font in &sections.top {
                                (font_card(font, ledger, &filter))
                            }
                        }
                    }
                }
                @if !sections.rest.is_empty() {
                    section class="rest" {
                        h2 { "More fonts" }
                        div class="fonts" {
                            @for font in &sections.rest {
                                (font_card(font, ledger, &filter))
                            }
                        }
                    }
                }
            }
        },
    )
}

fn quota_info(ledger: &VoteLedger) -> Markup {
    let rules = ledger.rules();
    html! {
        div class="quota" {
            @if rules.enabled {
                "You have "
                span class="remaining" { (ledger.remaining_votes()) }
                " of " (rules.max_votes)
                @match rules.quota_policy {
                    QuotaPolicy::Upvotes => { " upvotes left." }
                    QuotaPolicy::All => { " votes left." }
                }
            } @else {
                "Voting is closed."
            }
        }
    }
}

fn tag_filter(tags: &[Tag], selected: &[&str]) -> Markup {
    html! {
        @if !tags.is_empty() {
            nav class="tag-filter" {
                @for tag in tags {
                    @let is_selected = selected.contains(&tag.name.as_str());
                    a class=(if is_selected { "tag selected" } else { "tag" })
                        href=(filter_href(&toggle_tag(selected, &tag.name))) { (tag.name) }
                }
                @if !selected.is_empty() {
                    a class="clear" href=(filter_href(&[])) { "clear" }
                }
            }
        }
    }
}

fn toggle_tag<'a>(selected: &[&'a str], name: &'a str) -> Vec<&'a str> {
    if selected.contains(&name) {
        selected.iter().copied().filter(|s| *s != name).collect()
    } else {
        selected.iter().copied().chain(Some(name)).collect()
    }
}

fn font_card(font: &CatalogFont, ledger: &VoteLedger, filter: &str) -> Markup {
    let id = font.font.id;
    html! {
        div class="font-card" {
            div class="sample" style=(font_family_style(&font.font)) { (font.font.name) }
            div class="score" {
                span class="net" { (font.net_score()) }
                span class="counts" {
                    "+" (font.font.upvotes) " / -" (font.font.downvotes)
                }
            }
            @if !font.tags.is_empty() {
                ul class="tags" {
                    @for tag in &font.tags {
                        li { (tag) }
                    }
                }
            }
            @if ledger.rules().enabled {
                @if let Some(direction) = ledger.direction_of(id) {
                    form class="vote" action=(format!("/fonts/{id}/undo")) method="POST" {
                        input type="hidden" name="tags" value=(filter);
                        span class=(format!("voted {direction}")) { "You voted " (direction.as_str()) }
                        input class="btn" type="submit" value="undo";
                    }
                } @else {
                    form class="vote" action=(format!("/fonts/{id}/vote")) method="POST" {
                        input type="hidden" name="tags" value=(filter);
                        button class="btn up" type="submit" name="direction" value="up" { "upvote" }
                        button class="btn down" type="submit" name="direction" value="down" { "downvote" }
                    }
                }
            }
        }
    }
}
