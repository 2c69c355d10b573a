use super::*;

impl VoteRepo for DbReadOnly<'_> {
    fn cast_vote(&self, _: FontId, _: &VoterId, _: VoteDirection) -> Result<()> {
        Err(read_only_err())
    }
    fn remove_vote(&self, _: FontId, _: &VoterId, _: VoteDirection) -> Result<()> {
        Err(read_only_err())
    }
    fn load_votes_of_voter(&self, voter: &VoterId) -> Result<Vec<Vote>> {
        load_votes_of_voter(&mut self.conn.borrow_mut(), voter)
    }
}

impl VoteRepo for DbReadWrite<'_> {
    fn cast_vote(&self, font_id: FontId, voter: &VoterId, direction: VoteDirection) -> Result<()> {
        cast_vote(&mut self.conn.borrow_mut(), font_id, voter, direction)
    }
    fn remove_vote(
        &self,
        font_id: FontId,
        voter: &VoterId,
        direction: VoteDirection,
    ) -> Result<()> {
        remove_vote(&mut self.conn.borrow_mut(), font_id, voter, direction)
    }
    fn load_votes_of_voter(&self, voter: &VoterId) -> Result<Vec<Vote>> {
        load_votes_of_voter(&mut self.conn.borrow_mut(), voter)
    }
}

impl VoteRepo for DbConnection<'_> {
    fn cast_vote(&self, font_id: FontId, voter: &VoterId, direction: VoteDirection) -> Result<()> {
        cast_vote(&mut self.conn.borrow_mut(), font_id, voter, direction)
    }
    fn remove_vote(
        &self,
        font_id: FontId,
        voter: &VoterId,
        direction: VoteDirection,
    ) -> Result<()> {
        remove_vote(&mut self.conn.borrow_mut(), font_id, voter, direction)
    }
    fn load_votes_of_voter(&self, voter: &VoterId) -> Result<Vec<Vote>> {
        load_votes_of_voter(&mut self.conn.borrow_mut(), voter)
    }
}

// Both procedures run in their own (nested) transaction, so that
// the vote row and the counter always change together.

fn cast_vote(
    conn: &mut SqliteConnection,
    font_id: FontId,
    voter: &VoterId,
    direction: VoteDirection,
) -> Result<()> {
    use schema::fonts::dsl as f;
    conn.transaction::<_, DieselError, _>(|conn| {
        f::fonts
            .select(f::id)
            .filter(f::id.eq(font_id.get()))
            .first::<i64>(conn)?;
        let model = models::NewVote {
            font_id: font_id.get(),
            user_id: voter.to_string(),
            vote_type: direction.as_str(),
            created_at: Timestamp::now().as_seconds(),
        };
        diesel::insert_into(schema::votes::table)
            .values(&model)
            .execute(conn)?;
        let target = f::fonts.filter(f::id.eq(font_id.get()));
        let count = match direction {
            VoteDirection::Up => diesel::update(target)
                .set(f::upvotes.eq(f::upvotes + 1))
                .execute(conn)?,
            VoteDirection::Down => diesel::update(target)
                .set(f::downvotes.eq(f::downvotes + 1))
                .execute(conn)?,
        };
        debug_assert_eq!(1, count);
        Ok(())
    })
    .map_err(from_diesel_err)
}

fn remove_vote(
    conn: &mut SqliteConnection,
    font_id: FontId,
    voter: &VoterId,
    direction: VoteDirection,
) -> Result<()> {
    use schema::{fonts::dsl as f, votes::dsl as v};
    conn.transaction::<_, DieselError, _>(|conn| {
        let deleted = diesel::delete(
            v::votes
                .filter(v::font_id.eq(font_id.get()))
                .filter(v::user_id.eq(voter.to_string()))
                .filter(v::vote_type.eq(direction.as_str())),
        )
        .execute(conn)?;
        if deleted == 0 {
            return Err(DieselError::NotFound);
        }
        // Counters never drop below zero
        let target = f::fonts.filter(f::id.eq(font_id.get()));
        match direction {
            VoteDirection::Up => diesel::update(target.filter(f::upvotes.gt(0)))
                .set(f::upvotes.eq(f::upvotes - 1))
                .execute(conn)?,
            VoteDirection::Down => diesel::update(target.filter(f::downvotes.gt(0)))
                .set(f::downvotes.eq(f::downvotes - 1))
                .execute(conn)?,
        };
        Ok(())
    })
    .map_err(from_diesel_err)
}

fn load_votes_of_voter(conn: &mut SqliteConnection, voter: &VoterId) -> Result<Vec<Vote>> {
    use schema::votes::dsl;
    dsl::votes
        .filter(dsl::user_id.eq(voter.to_string()))
        .order_by(dsl::created_at)
        .load::<models::VoteEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_vote)
        .collect()
}
