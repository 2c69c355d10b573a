use super::*;
use fontvote_core::{
    catalog::Catalog,
    ledger::{VoteLedger, VotingRules},
};

pub fn load_catalog(connections: &sqlite::Connections) -> Result<Catalog> {
    let db = connections.shared()?;
    Ok(usecases::load_catalog(&db)?)
}

pub fn load_ledger(
    connections: &sqlite::Connections,
    voter: VoterId,
    rules: VotingRules,
) -> Result<VoteLedger> {
    let db = connections.shared()?;
    Ok(usecases::load_ledger(&db, voter, rules)?)
}

pub fn get_font(connections: &sqlite::Connections, id: FontId) -> Result<Font> {
    let db = connections.shared()?;
    Ok(db.get_font(id)?)
}
