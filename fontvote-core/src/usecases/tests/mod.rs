use std::cell::{Cell, RefCell};

use anyhow::anyhow;

use crate::{entities::*, repositories::*};

type RepoResult<T> = std::result::Result<T, Error>;

/// In-memory store for testing use cases.
///
/// Setting `fail_next_vote` lets the next vote procedure
/// call fail without touching any data.
#[derive(Default)]
pub struct MockDb {
    pub fonts: RefCell<Vec<Font>>,
    pub tags: RefCell<Vec<Tag>>,
    pub font_tags: RefCell<Vec<FontTag>>,
    pub votes: RefCell<Vec<Vote>>,
    pub fail_next_vote: Cell<bool>,
    pub vote_calls: Cell<usize>,
}

impl MockDb {
    fn next_vote_call(&self) -> RepoResult<()> {
        self.vote_calls.set(self.vote_calls.get() + 1);
        if self.fail_next_vote.replace(false) {
            return Err(Error::Other(anyhow!("injected failure")));
        }
        Ok(())
    }

    fn font_exists(&self, id: FontId) -> bool {
        self.fonts.borrow().iter().any(|f| f.id == id)
    }
}

impl FontRepo for MockDb {
    fn create_font(&self, new_font: &NewFont) -> RepoResult<Font> {
        let mut fonts = self.fonts.borrow_mut();
        if fonts.iter().any(|f| f.name == new_font.name) {
            return Err(Error::AlreadyExists);
        }
        let id = fonts.iter().map(|f| f.id.get()).max().unwrap_or_default() + 1;
        let font = Font {
            id: FontId::new(id),
            name: new_font.name.clone(),
            url: new_font.url.clone(),
            upvotes: 0,
            downvotes: 0,
        };
        fonts.push(font.clone());
        Ok(font)
    }

    fn get_font(&self, id: FontId) -> RepoResult<Font> {
        self.fonts
            .borrow()
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_fonts(&self) -> RepoResult<Vec<Font>> {
        let mut fonts = self.fonts.borrow().clone();
        fonts.sort_by_key(|f| f.id);
        Ok(fonts)
    }

    fn count_fonts(&self) -> RepoResult<usize> {
        Ok(self.fonts.borrow().len())
    }
}

impl TagRepo for MockDb {
    fn create_tag(&self, name: &str) -> RepoResult<Tag> {
        let mut tags = self.tags.borrow_mut();
        if tags.iter().any(|t| t.name == name) {
            return Err(Error::AlreadyExists);
        }
        let id = tags.iter().map(|t| t.id.get()).max().unwrap_or_default() + 1;
        let tag = Tag {
            id: TagId::new(id),
            name: name.to_owned(),
        };
        tags.push(tag.clone());
        Ok(tag)
    }

    fn all_tags(&self) -> RepoResult<Vec<Tag>> {
        let mut tags = self.tags.borrow().clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    fn count_tags(&self) -> RepoResult<usize> {
        Ok(self.tags.borrow().len())
    }
}

impl FontTagRepo for MockDb {
    fn all_font_tags(&self) -> RepoResult<Vec<FontTag>> {
        Ok(self.font_tags.borrow().clone())
    }

    fn load_tag_ids_of_font(&self, font_id: FontId) -> RepoResult<Vec<TagId>> {
        Ok(self
            .font_tags
            .borrow()
            .iter()
            .filter(|ft| ft.font_id == font_id)
            .map(|ft| ft.tag_id)
            .collect())
    }

    fn add_font_tags(&self, font_id: FontId, tag_ids: &[TagId]) -> RepoResult<usize> {
        let mut font_tags = self.font_tags.borrow_mut();
        for tag_id in tag_ids {
            let ft = FontTag {
                font_id,
                tag_id: *tag_id,
            };
            if font_tags.contains(&ft) {
                return Err(Error::AlreadyExists);
            }
            font_tags.push(ft);
        }
        Ok(tag_ids.len())
    }

    fn remove_font_tags(&self, font_id: FontId, tag_ids: &[TagId]) -> RepoResult<usize> {
        let mut font_tags = self.font_tags.borrow_mut();
        let count = font_tags.len();
        font_tags.retain(|ft| ft.font_id != font_id || !tag_ids.contains(&ft.tag_id));
        Ok(count - font_tags.len())
    }
}

impl VoteRepo for MockDb {
    fn cast_vote(
        &self,
        font_id: FontId,
        voter: &VoterId,
        direction: VoteDirection,
    ) -> RepoResult<()> {
        self.next_vote_call()?;
        if !self.font_exists(font_id) {
            return Err(Error::NotFound);
        }
        let mut votes = self.votes.borrow_mut();
        if votes
            .iter()
            .any(|v| v.font_id == font_id && v.voter == *voter)
        {
            return Err(Error::AlreadyExists);
        }
        votes.push(Vote {
            font_id,
            voter: *voter,
            direction,
            created_at: Timestamp::now(),
        });
        if let Some(font) = self.fonts.borrow_mut().iter_mut().find(|f| f.id == font_id) {
            font.increment(direction);
        }
        Ok(())
    }

    fn remove_vote(
        &self,
        font_id: FontId,
        voter: &VoterId,
        direction: VoteDirection,
    ) -> RepoResult<()> {
        self.next_vote_call()?;
        let mut votes = self.votes.borrow_mut();
        let pos = votes
            .iter()
            .position(|v| v.font_id == font_id && v.voter == *voter && v.direction == direction)
            .ok_or(Error::NotFound)?;
        votes.remove(pos);
        if let Some(font) = self.fonts.borrow_mut().iter_mut().find(|f| f.id == font_id) {
            font.decrement(direction);
        }
        Ok(())
    }

    fn load_votes_of_voter(&self, voter: &VoterId) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| v.voter == *voter)
            .cloned()
            .collect())
    }
}
