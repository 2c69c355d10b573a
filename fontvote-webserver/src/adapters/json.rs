pub use fontvote_boundary::*;

use crate::core::{catalog::CatalogFont, ledger, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    pub fn new_font_params(from: NewFont) -> usecases::NewFontParams {
        let NewFont { name, url } = from;
        usecases::NewFontParams { name, url }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    /// A catalog font as seen by the given voter.
    pub fn font(from: &CatalogFont, ledger: Option<&ledger::VoteLedger>) -> Font {
        let mut font = Font::from(from.font.clone());
        font.tags = from.tags.clone();
        font.vote = ledger
            .and_then(|l| l.direction_of(from.font.id))
            .map(Into::into);
        font
    }

    pub fn quota_policy(from: ledger::QuotaPolicy) -> QuotaPolicy {
        match from {
            ledger::QuotaPolicy::Upvotes => QuotaPolicy::Upvotes,
            ledger::QuotaPolicy::All => QuotaPolicy::All,
        }
    }

    pub fn vote_ledger(from: &ledger::VoteLedger) -> VoteLedger {
        let rules = from.rules();
        VoteLedger {
            voting_enabled: rules.enabled,
            max_votes: rules.max_votes,
            remaining_votes: from.remaining_votes(),
            quota_policy: quota_policy(rules.quota_policy),
            votes: from
                .entries()
                .map(|(font_id, direction)| LedgerEntry {
                    font_id: font_id.get(),
                    direction: direction.into(),
                })
                .collect(),
        }
    }
}
