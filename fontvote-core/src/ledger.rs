//! The vote ledger of a single voter.
//!
//! The ledger is hydrated from the store on every request and
//! holds the directions of all votes the voter currently has.
//! It is used to validate a vote action locally before the
//! store is touched.

use std::{collections::BTreeMap, fmt, str::FromStr};

use thiserror::Error;

use crate::entities::*;

/// Which votes count against the quota.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum QuotaPolicy {
    /// Only held upvotes count and only upvotes are capped.
    #[default]
    Upvotes,
    /// Every vote counts and both directions are capped.
    All,
}

impl QuotaPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upvotes => "upvotes",
            Self::All => "all",
        }
    }

    fn counts(self, direction: VoteDirection) -> bool {
        match self {
            Self::Upvotes => direction == VoteDirection::Up,
            Self::All => true,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown quota policy: {0}")]
pub struct QuotaPolicyParseError(String);

impl FromStr for QuotaPolicy {
    type Err = QuotaPolicyParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upvotes" | "up" => Ok(Self::Upvotes),
            "all" => Ok(Self::All),
            _ => Err(QuotaPolicyParseError(s.to_owned())),
        }
    }
}

impl fmt::Display for QuotaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct VotingRules {
    /// Freezes all vote mutations if `false`.
    pub enabled: bool,
    pub max_votes: usize,
    pub quota_policy: QuotaPolicy,
}

impl Default for VotingRules {
    fn default() -> Self {
        Self {
            enabled: true,
            max_votes: 8,
            quota_policy: QuotaPolicy::default(),
        }
    }
}

/// Reasons for rejecting a vote before the store is called.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Rejection {
    VotingDisabled,
    AlreadyVoted,
    QuotaExceeded,
}

#[derive(Debug, Clone)]
pub struct VoteLedger {
    voter: VoterId,
    rules: VotingRules,
    votes: BTreeMap<FontId, VoteDirection>,
}

impl VoteLedger {
    pub fn new(voter: VoterId, rules: VotingRules) -> Self {
        Self {
            voter,
            rules,
            votes: Default::default(),
        }
    }

    pub fn hydrate(
        voter: VoterId,
        rules: VotingRules,
        votes: impl IntoIterator<Item = Vote>,
    ) -> Self {
        let mut ledger = Self::new(voter, rules);
        for vote in votes {
            debug_assert_eq!(vote.voter, voter);
            ledger.votes.insert(vote.font_id, vote.direction);
        }
        ledger
    }

    pub fn voter(&self) -> &VoterId {
        &self.voter
    }

    pub fn rules(&self) -> &VotingRules {
        &self.rules
    }

    pub fn direction_of(&self, font_id: FontId) -> Option<VoteDirection> {
        self.votes.get(&font_id).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (FontId, VoteDirection)> + '_ {
        self.votes.iter().map(|(id, dir)| (*id, *dir))
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Number of votes that count against the quota.
    pub fn counted_votes(&self) -> usize {
        self.votes
            .values()
            .filter(|dir| self.rules.quota_policy.counts(**dir))
            .count()
    }

    pub fn remaining_votes(&self) -> usize {
        self.rules.max_votes.saturating_sub(self.counted_votes())
    }

    pub fn check_cast(&self, font_id: FontId, direction: VoteDirection) -> Result<(), Rejection> {
        if !self.rules.enabled {
            return Err(Rejection::VotingDisabled);
        }
        if self.votes.contains_key(&font_id) {
            return Err(Rejection::AlreadyVoted);
        }
        if self.rules.quota_policy.counts(direction) && self.remaining_votes() == 0 {
            return Err(Rejection::QuotaExceeded);
        }
        Ok(())
    }

    pub(crate) fn record(&mut self, font_id: FontId, direction: VoteDirection) {
        let _prev = self.votes.insert(font_id, direction);
        debug_assert!(_prev.is_none());
    }

    pub(crate) fn forget(&mut self, font_id: FontId) -> Option<VoteDirection> {
        self.votes.remove(&font_id)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ActionKind {
    Cast(VoteDirection),
    Undo,
}

/// Lifecycle of a single vote action:
/// `Idle → Pending → Committed | RolledBack`
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Pending,
    Committed,
    RolledBack,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VoteAction {
    font_id: FontId,
    kind: ActionKind,
    state: ActionState,
}

impl VoteAction {
    pub fn cast(font_id: FontId, direction: VoteDirection) -> Self {
        Self {
            font_id,
            kind: ActionKind::Cast(direction),
            state: ActionState::Idle,
        }
    }

    pub fn undo(font_id: FontId) -> Self {
        Self {
            font_id,
            kind: ActionKind::Undo,
            state: ActionState::Idle,
        }
    }

    pub fn font_id(&self) -> FontId {
        self.font_id
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn state(&self) -> ActionState {
        self.state
    }

    pub(crate) fn begin(&mut self) {
        debug_assert_eq!(self.state, ActionState::Idle);
        self.state = ActionState::Pending;
    }

    pub(crate) fn commit(&mut self) {
        debug_assert_eq!(self.state, ActionState::Pending);
        self.state = ActionState::Committed;
    }

    pub(crate) fn roll_back(&mut self) {
        debug_assert_eq!(self.state, ActionState::Pending);
        self.state = ActionState::RolledBack;
    }
}
