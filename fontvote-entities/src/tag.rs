use std::{fmt, num::ParseIntError, str::FromStr};

use crate::font::FontId;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TagId(i64);

impl TagId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for TagId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<TagId> for i64 {
    fn from(from: TagId) -> Self {
        from.0
    }
}

impl FromStr for TagId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

/// Association between a font and a tag.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FontTag {
    pub font_id: FontId,
    pub tag_id: TagId,
}
