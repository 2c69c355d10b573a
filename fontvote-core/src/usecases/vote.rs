use super::prelude::*;
use crate::{
    ledger::{ActionKind, VoteAction, VoteLedger, VotingRules},
    repositories,
};

pub fn load_ledger<R: VoteRepo>(
    repo: &R,
    voter: VoterId,
    rules: VotingRules,
) -> Result<VoteLedger> {
    let votes = repo.load_votes_of_voter(&voter)?;
    Ok(VoteLedger::hydrate(voter, rules, votes))
}

/// Casts a vote on `font` after validating it against the ledger.
///
/// Rejected votes never reach the store and leave the action
/// idle. Ledger and counters are only updated after the store
/// has accepted the vote; otherwise the action is rolled back
/// and both stay untouched.
pub fn cast_vote<R: VoteRepo>(
    repo: &R,
    ledger: &mut VoteLedger,
    font: &mut Font,
    action: &mut VoteAction,
) -> Result<()> {
    debug_assert_eq!(font.id, action.font_id());
    let ActionKind::Cast(direction) = action.kind() else {
        return undo_vote(repo, ledger, font, action);
    };
    if let Err(rejection) = ledger.check_cast(font.id, direction) {
        log::debug!(
            "Rejected {direction} vote of {} on font {}: {rejection:?}",
            ledger.voter(),
            font.id
        );
        return Err(rejection.into());
    }
    action.begin();
    match repo.cast_vote(font.id, ledger.voter(), direction) {
        Ok(()) => {
            font.increment(direction);
            ledger.record(font.id, direction);
            action.commit();
            log::info!("Voted {direction} on font {} ({})", font.id, font.name);
            Ok(())
        }
        Err(err) => {
            action.roll_back();
            log::warn!("Failed to cast vote on font {}: {err}", font.id);
            Err(match err {
                repositories::Error::AlreadyExists => Error::AlreadyVoted,
                err => err.into(),
            })
        }
    }
}

/// Removes the vote of the ledger's voter from `font`.
///
/// Does nothing if the voter has no vote on this font.
pub fn undo_vote<R: VoteRepo>(
    repo: &R,
    ledger: &mut VoteLedger,
    font: &mut Font,
    action: &mut VoteAction,
) -> Result<()> {
    debug_assert_eq!(font.id, action.font_id());
    debug_assert_eq!(action.kind(), ActionKind::Undo);
    if !ledger.rules().enabled {
        return Err(Error::VotingDisabled);
    }
    let Some(direction) = ledger.direction_of(font.id) else {
        log::debug!("Nothing to undo for font {}", font.id);
        return Ok(());
    };
    action.begin();
    match repo.remove_vote(font.id, ledger.voter(), direction) {
        Ok(()) => {
            font.decrement(direction);
            ledger.forget(font.id);
            action.commit();
            log::info!("Removed {direction} vote on font {} ({})", font.id, font.name);
            Ok(())
        }
        Err(err) => {
            action.roll_back();
            log::warn!("Failed to remove vote on font {}: {err}", font.id);
            Err(match err {
                repositories::Error::NotFound => Error::NotVoted,
                err => err.into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use crate::ledger::{ActionState, QuotaPolicy};
    use fontvote_entities::builders::*;

    fn rules(max_votes: usize) -> VotingRules {
        VotingRules {
            enabled: true,
            max_votes,
            quota_policy: QuotaPolicy::Upvotes,
        }
    }

    fn setup(fonts: Vec<Font>) -> (MockDb, VoterId) {
        let db = MockDb::default();
        db.fonts.borrow_mut().extend(fonts);
        (db, VoterId::new())
    }

    fn font(db: &MockDb, id: i64) -> Font {
        db.get_font(FontId::new(id)).unwrap()
    }

    fn cast(
        db: &MockDb,
        ledger: &mut VoteLedger,
        f: &mut Font,
        direction: VoteDirection,
    ) -> Result<()> {
        let mut action = VoteAction::cast(f.id, direction);
        cast_vote(db, ledger, f, &mut action)
    }

    fn undo(db: &MockDb, ledger: &mut VoteLedger, f: &mut Font) -> Result<()> {
        let mut action = VoteAction::undo(f.id);
        undo_vote(db, ledger, f, &mut action)
    }

    #[test]
    fn cast_increments_exactly_one_counter() {
        let (db, voter) = setup(vec![Font::build().id(1).upvotes(2).downvotes(1).finish()]);
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        let mut f = font(&db, 1);
        let mut action = VoteAction::cast(f.id, VoteDirection::Up);
        cast_vote(&db, &mut ledger, &mut f, &mut action).unwrap();
        assert_eq!(action.state(), ActionState::Committed);
        assert_eq!((f.upvotes, f.downvotes), (3, 1));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.direction_of(f.id), Some(VoteDirection::Up));
        // the store has been updated as well
        assert_eq!(font(&db, 1).upvotes, 3);
        assert_eq!(db.votes.borrow().len(), 1);
    }

    #[test]
    fn cast_downvote() {
        let (db, voter) = setup(vec![Font::build().id(1).finish()]);
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        let mut f = font(&db, 1);
        let mut action = VoteAction::cast(f.id, VoteDirection::Down);
        cast_vote(&db, &mut ledger, &mut f, &mut action).unwrap();
        assert_eq!((f.upvotes, f.downvotes), (0, 1));
        assert_eq!(f.net_score(), -1);
    }

    #[test]
    fn second_cast_on_same_font_is_rejected_without_store_call() {
        let (db, voter) = setup(vec![Font::build().id(1).finish()]);
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        let mut f = font(&db, 1);
        cast(&db, &mut ledger, &mut f, VoteDirection::Up).unwrap();
        let calls = db.vote_calls.get();

        let mut action = VoteAction::cast(f.id, VoteDirection::Down);
        let err = cast_vote(&db, &mut ledger, &mut f, &mut action).unwrap_err();
        assert!(matches!(err, Error::AlreadyVoted));
        assert_eq!(action.state(), ActionState::Idle);
        assert_eq!(db.vote_calls.get(), calls);
        assert_eq!((f.upvotes, f.downvotes), (1, 0));
    }

    #[test]
    fn ninth_upvote_exceeds_quota_of_eight() {
        let fonts = (1..=9).map(|id| Font::build().id(id).finish()).collect();
        let (db, voter) = setup(fonts);
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        for id in 1..=8 {
            let mut f = font(&db, id);
            cast(&db, &mut ledger, &mut f, VoteDirection::Up).unwrap();
        }
        assert_eq!(ledger.remaining_votes(), 0);
        let calls = db.vote_calls.get();

        let mut f = font(&db, 9);
        let mut action = VoteAction::cast(f.id, VoteDirection::Up);
        let err = cast_vote(&db, &mut ledger, &mut f, &mut action).unwrap_err();
        assert!(matches!(err, Error::QuotaExceeded));
        assert_eq!(db.vote_calls.get(), calls);
        assert_eq!((f.upvotes, f.downvotes), (0, 0));
        assert_eq!(font(&db, 9).upvotes, 0);
        assert_eq!(ledger.len(), 8);
    }

    #[test]
    fn failing_store_rolls_back() {
        let (db, voter) = setup(vec![Font::build().id(1).upvotes(4).finish()]);
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        let mut f = font(&db, 1);
        db.fail_next_vote.set(true);
        let mut action = VoteAction::cast(f.id, VoteDirection::Up);
        let err = cast_vote(&db, &mut ledger, &mut f, &mut action).unwrap_err();
        assert!(matches!(err, Error::Repo(_)));
        assert_eq!(action.state(), ActionState::RolledBack);
        assert_eq!(f.upvotes, 4);
        assert!(ledger.is_empty());
    }

    #[test]
    fn store_duplicate_maps_to_already_voted() {
        let (db, voter) = setup(vec![Font::build().id(1).finish()]);
        // The ledger is stale: the vote was cast somewhere else.
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        db.cast_vote(FontId::new(1), &voter, VoteDirection::Up).unwrap();
        let mut f = font(&db, 1);
        let mut action = VoteAction::cast(f.id, VoteDirection::Up);
        let err = cast_vote(&db, &mut ledger, &mut f, &mut action).unwrap_err();
        assert!(matches!(err, Error::AlreadyVoted));
        assert_eq!(action.state(), ActionState::RolledBack);
    }

    #[test]
    fn disabled_voting_rejects_mutations() {
        let (db, voter) = setup(vec![Font::build().id(1).finish()]);
        let rules = VotingRules {
            enabled: false,
            ..rules(8)
        };
        let mut ledger = load_ledger(&db, voter, rules).unwrap();
        let mut f = font(&db, 1);
        let err = cast(&db, &mut ledger, &mut f, VoteDirection::Up).unwrap_err();
        assert!(matches!(err, Error::VotingDisabled));
        let err = undo(&db, &mut ledger, &mut f).unwrap_err();
        assert!(matches!(err, Error::VotingDisabled));
        assert_eq!(db.vote_calls.get(), 0);
    }

    #[test]
    fn undo_removes_entry_and_decrements() {
        let (db, voter) = setup(vec![Font::build().id(1).downvotes(2).finish()]);
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        let mut f = font(&db, 1);
        cast(&db, &mut ledger, &mut f, VoteDirection::Down).unwrap();
        assert_eq!(f.downvotes, 3);

        let mut action = VoteAction::undo(f.id);
        undo_vote(&db, &mut ledger, &mut f, &mut action).unwrap();
        assert_eq!(action.state(), ActionState::Committed);
        assert_eq!(f.downvotes, 2);
        assert!(ledger.is_empty());
        assert!(db.votes.borrow().is_empty());
    }

    #[test]
    fn undo_never_goes_below_zero() {
        let (db, voter) = setup(vec![Font::build().id(1).finish()]);
        db.votes.borrow_mut().push(
            Vote::build()
                .font_id(1)
                .voter(voter)
                .direction(VoteDirection::Up)
                .finish(),
        );
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        let mut f = font(&db, 1);
        assert_eq!(f.upvotes, 0);
        undo(&db, &mut ledger, &mut f).unwrap();
        assert_eq!(f.upvotes, 0);
        assert_eq!(font(&db, 1).upvotes, 0);
    }

    #[test]
    fn undo_without_vote_is_a_noop() {
        let (db, voter) = setup(vec![Font::build().id(1).upvotes(1).finish()]);
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        let mut f = font(&db, 1);
        let mut action = VoteAction::undo(f.id);
        undo_vote(&db, &mut ledger, &mut f, &mut action).unwrap();
        assert_eq!(action.state(), ActionState::Idle);
        assert_eq!(f.upvotes, 1);
        assert_eq!(db.vote_calls.get(), 0);
    }

    #[test]
    fn failing_undo_keeps_the_vote() {
        let (db, voter) = setup(vec![Font::build().id(1).finish()]);
        let mut ledger = load_ledger(&db, voter, rules(8)).unwrap();
        let mut f = font(&db, 1);
        cast(&db, &mut ledger, &mut f, VoteDirection::Up).unwrap();
        db.fail_next_vote.set(true);
        let mut action = VoteAction::undo(f.id);
        assert!(undo_vote(&db, &mut ledger, &mut f, &mut action).is_err());
        assert_eq!(action.state(), ActionState::RolledBack);
        assert_eq!(f.upvotes, 1);
        assert_eq!(ledger.direction_of(f.id), Some(VoteDirection::Up));
    }

    #[test]
    fn ledgers_of_different_voters_are_independent() {
        let (db, alice) = setup(vec![Font::build().id(1).finish()]);
        let bob = VoterId::new();
        let mut ledger = load_ledger(&db, alice, rules(8)).unwrap();
        let mut f = font(&db, 1);
        cast(&db, &mut ledger, &mut f, VoteDirection::Up).unwrap();
        let ledger = load_ledger(&db, bob, rules(8)).unwrap();
        assert!(ledger.is_empty());
    }
}
