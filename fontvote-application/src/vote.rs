use super::*;
use fontvote_core::ledger::{VoteAction, VoteLedger, VotingRules};

/// The state after a successful vote action.
#[derive(Debug, Clone)]
pub struct VoteOutcome {
    pub font: Font,
    pub ledger: VoteLedger,
    pub action: VoteAction,
}

pub fn cast_vote(
    connections: &sqlite::Connections,
    voter: VoterId,
    rules: VotingRules,
    font_id: FontId,
    direction: VoteDirection,
) -> Result<VoteOutcome> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let mut ledger = usecases::load_ledger(conn, voter, rules)?;
        let mut font = conn.get_font(font_id)?;
        let mut action = VoteAction::cast(font_id, direction);
        usecases::cast_vote(conn, &mut ledger, &mut font, &mut action).map_err(|err| {
            log::warn!("Failed to cast {direction} vote on font {font_id}: {err}");
            err
        })?;
        Ok::<_, usecases::Error>(VoteOutcome {
            font,
            ledger,
            action,
        })
    })?)
}

pub fn undo_vote(
    connections: &sqlite::Connections,
    voter: VoterId,
    rules: VotingRules,
    font_id: FontId,
) -> Result<VoteOutcome> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let mut ledger = usecases::load_ledger(conn, voter, rules)?;
        let mut font = conn.get_font(font_id)?;
        let mut action = VoteAction::undo(font_id);
        usecases::undo_vote(conn, &mut ledger, &mut font, &mut action).map_err(|err| {
            log::warn!("Failed to undo vote on font {font_id}: {err}");
            err
        })?;
        Ok::<_, usecases::Error>(VoteOutcome {
            font,
            ledger,
            action,
        })
    })?)
}
