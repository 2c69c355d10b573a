#![allow(proc_macro_derive_resolution_fallback)]
#![recursion_limit = "256"]

#[macro_use]
extern crate log;

use fontvote_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    web::run(connections.into(), enable_cors, cfg, version).await;
}
