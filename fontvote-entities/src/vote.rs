use strum::{Display, EnumString, IntoStaticStr};

use crate::{font::FontId, time::Timestamp, voter::VoterId};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A single vote of one voter on one font.
///
/// There is at most one vote per (voter, font).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vote {
    pub font_id: FontId,
    pub voter: VoterId,
    pub direction: VoteDirection,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_string_representation() {
        assert_eq!(VoteDirection::Up.as_str(), "up");
        assert_eq!(VoteDirection::Down.to_string(), "down");
        assert_eq!("up".parse::<VoteDirection>().unwrap(), VoteDirection::Up);
        assert!("sideways".parse::<VoteDirection>().is_err());
    }
}
