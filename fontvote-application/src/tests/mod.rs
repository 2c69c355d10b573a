pub mod prelude {
    pub use fontvote_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            fontvote_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_font(&self, name: &str) -> Font {
            flows::add_font(
                &self.db_connections,
                usecases::NewFontParams {
                    name: name.into(),
                    url: format!("https://fonts.example.com/css?family={name}"),
                },
            )
            .unwrap()
        }

        pub fn create_tag(&self, name: &str) -> Tag {
            flows::create_tag(&self.db_connections, name).unwrap()
        }

        pub fn get_font(&self, id: FontId) -> Font {
            flows::get_font(&self.db_connections, id).unwrap()
        }
    }
}
