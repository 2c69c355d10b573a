#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = fonts)]
pub struct NewFont<'a> {
    pub name: &'a str,
    pub url: &'a str,
}

#[derive(Queryable)]
pub struct FontEntity {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub upvotes: i64,
    pub downvotes: i64,
}

#[derive(Insertable)]
#[diesel(table_name = tags)]
pub struct NewTag<'a> {
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct TagEntity {
    pub id: i64,
    pub name: String,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = font_tags)]
pub struct FontTag {
    pub font_id: i64,
    pub tag_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = votes)]
pub struct NewVote<'a> {
    pub font_id: i64,
    pub user_id: String,
    pub vote_type: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct VoteEntity {
    pub font_id: i64,
    pub user_id: String,
    pub vote_type: String,
    pub created_at: i64,
}
