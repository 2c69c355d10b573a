use anyhow::Result as Fallible;
use fontvote_db_sqlite::Connections as ConnectionPool;
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};
use std::ops::Deref;

use crate::core::prelude::*;

/// The managed database pool as a request guard.
///
/// Read and write access goes through the pool it derefs to.
#[derive(Clone)]
pub struct Connections(ConnectionPool);

/// Size of the catalog at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSize {
    pub fonts: usize,
    pub tags: usize,
}

impl Connections {
    pub fn catalog_size(&self) -> Fallible<CatalogSize> {
        let db = self.shared()?;
        Ok(CatalogSize {
            fonts: db.count_fonts()?,
            tags: db.count_tags()?,
        })
    }
}

impl From<ConnectionPool> for Connections {
    fn from(pool: ConnectionPool) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = ConnectionPool;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<Connections>() {
            Some(connections) => Outcome::Success(connections.clone()),
            None => {
                error!("No database connections are managed");
                Outcome::Error((Status::InternalServerError, ()))
            }
        }
    }
}
