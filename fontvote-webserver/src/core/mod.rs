pub use fontvote_core::{catalog, ledger, repositories, theme};

pub mod entities {
    pub use fontvote_core::entities::*;
    #[cfg(test)]
    pub use fontvote_entities::builders::*;
}

pub mod usecases {
    pub use fontvote_core::usecases::*;
}

pub mod prelude {
    pub use super::{
        catalog::{Catalog, CatalogFont},
        entities::*,
        ledger::{QuotaPolicy, VoteLedger, VotingRules},
        repositories::{FontRepo, TagRepo},
    };
}
