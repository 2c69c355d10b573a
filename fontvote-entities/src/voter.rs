use std::{fmt, str::FromStr};

use uuid::Uuid;

/// Opaque identity of an anonymous voter.
///
/// Created once per browser and never rotated.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VoterId(Uuid);

impl VoterId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for VoterId {
    fn from(from: Uuid) -> Self {
        Self(from)
    }
}

impl From<VoterId> for Uuid {
    fn from(from: VoterId) -> Self {
        from.0
    }
}

impl FromStr for VoterId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}
