use super::*;
use fontvote_entities as e;

impl From<e::font::Font> for Font {
    fn from(from: e::font::Font) -> Self {
        let net_score = from.net_score();
        let e::font::Font {
            id,
            name,
            url,
            upvotes,
            downvotes,
        } = from;
        Self {
            id: id.into(),
            name,
            url: url.into(),
            upvotes,
            downvotes,
            net_score,
            tags: vec![],
            vote: None,
        }
    }
}

impl From<e::tag::Tag> for Tag {
    fn from(from: e::tag::Tag) -> Self {
        let e::tag::Tag { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<e::vote::VoteDirection> for VoteDirection {
    fn from(from: e::vote::VoteDirection) -> Self {
        use e::vote::VoteDirection as D;
        match from {
            D::Up => Self::Up,
            D::Down => Self::Down,
        }
    }
}

impl From<VoteDirection> for e::vote::VoteDirection {
    fn from(from: VoteDirection) -> Self {
        match from {
            VoteDirection::Up => Self::Up,
            VoteDirection::Down => Self::Down,
        }
    }
}
