use super::*;

fn vote_result(db: &sqlite::Connections, outcome: flows::VoteOutcome) -> Result<json::VoteResult> {
    let flows::VoteOutcome { font, ledger, .. } = outcome;
    let tags = flows::load_catalog(db)?
        .get(font.id)
        .map(|f| f.tags.clone())
        .unwrap_or_default();
    let font = to_json::font(&CatalogFont { font, tags }, Some(&ledger));
    Ok(Json(json::VoteResult {
        font,
        ledger: to_json::vote_ledger(&ledger),
    }))
}

/// The votes of the requesting voter.
#[get("/votes")]
pub fn get_votes(
    db: sqlite::Connections,
    voter: Voter,
    cfg: &State<Cfg>,
) -> Result<json::VoteLedger> {
    let ledger = flows::load_ledger(&db, voter.id(), cfg.voting)?;
    Ok(Json(to_json::vote_ledger(&ledger)))
}

#[post("/fonts/<id>/votes", format = "application/json", data = "<vote>")]
pub fn post_vote(
    db: sqlite::Connections,
    voter: Voter,
    cfg: &State<Cfg>,
    id: i64,
    vote: JsonResult<json::CastVote>,
) -> Result<json::VoteResult> {
    let json::CastVote { direction } = vote?.into_inner();
    let outcome = flows::cast_vote(
        &db,
        voter.id(),
        cfg.voting,
        FontId::new(id),
        direction.into(),
    )?;
    vote_result(&db, outcome)
}

#[delete("/fonts/<id>/votes")]
pub fn delete_vote(
    db: sqlite::Connections,
    voter: Voter,
    cfg: &State<Cfg>,
    id: i64,
) -> Result<json::VoteResult> {
    let outcome = flows::undo_vote(&db, voter.id(), cfg.voting, FontId::new(id))?;
    vote_result(&db, outcome)
}
