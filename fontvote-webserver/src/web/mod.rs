use std::time::Duration;

use rocket::{config::Config as RocketCfg, Rocket, Route};

use crate::core::prelude::*;

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub voting: VotingRules,
    /// An empty password disables the admin login.
    pub admin_password: String,
    pub admin_session_ttl: Duration,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            voting: VotingRules::default(),
            admin_password: String::new(),
            admin_session_ttl: Duration::from_secs(60 * 60 * 8),
        }
    }
}

impl Cfg {
    /// Number of fonts in the top section of the voting page.
    pub fn top_count(&self) -> usize {
        self.voting.max_votes
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    match db.catalog_size() {
        Ok(size) => info!("Serving {} fonts with {} tags", size.fonts, size.tags),
        Err(err) => warn!("Unable to count the catalog: {err}"),
    }
    if cfg.admin_password.is_empty() {
        warn!("No admin password configured: the admin console is locked");
    }
    if !cfg.voting.enabled {
        info!("Voting is disabled");
    }
    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(cfg).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg, version: &'static str) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
