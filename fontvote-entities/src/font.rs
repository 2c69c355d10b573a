use std::{fmt, num::ParseIntError, str::FromStr};

use url::Url;

use crate::vote::VoteDirection;

pub type VoteCount = u64;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FontId(i64);

impl FontId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for FontId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<FontId> for i64 {
    fn from(from: FontId) -> Self {
        from.0
    }
}

impl FromStr for FontId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A web font that can be voted on.
///
/// The `name` is used both for display and as the CSS
/// `font-family` value once the stylesheet at `url` is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub id: FontId,
    pub name: String,
    pub url: Url,
    pub upvotes: VoteCount,
    pub downvotes: VoteCount,
}

impl Font {
    /// Upvotes minus downvotes. Never stored.
    pub fn net_score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }

    pub fn count(&self, direction: VoteDirection) -> VoteCount {
        match direction {
            VoteDirection::Up => self.upvotes,
            VoteDirection::Down => self.downvotes,
        }
    }

    pub fn increment(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Up => self.upvotes += 1,
            VoteDirection::Down => self.downvotes += 1,
        }
    }

    /// Counters are floored at zero.
    pub fn decrement(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Up => self.upvotes = self.upvotes.saturating_sub(1),
            VoteDirection::Down => self.downvotes = self.downvotes.saturating_sub(1),
        }
    }

    /// CSS `font-family` value with a system fallback that is
    /// used until (or if never) the stylesheet has been loaded.
    pub fn css_family(&self) -> String {
        css_font_family(&self.name)
    }
}

pub fn css_font_family(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}', system-ui, sans-serif")
}

/// Values of a new font before it gets an id from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFont {
    pub name: String,
    pub url: Url,
}
