use super::*;

impl TagRepo for DbReadOnly<'_> {
    fn create_tag(&self, _name: &str) -> Result<Tag> {
        Err(read_only_err())
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }
}

impl TagRepo for DbReadWrite<'_> {
    fn create_tag(&self, name: &str) -> Result<Tag> {
        create_tag(&mut self.conn.borrow_mut(), name)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }
}

impl TagRepo for DbConnection<'_> {
    fn create_tag(&self, name: &str) -> Result<Tag> {
        create_tag(&mut self.conn.borrow_mut(), name)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }
}

fn create_tag(conn: &mut SqliteConnection, name: &str) -> Result<Tag> {
    use schema::tags::dsl;
    diesel::insert_into(schema::tags::table)
        .values(&models::NewTag { name })
        .execute(conn)
        .map_err(from_diesel_err)?;
    let entity = dsl::tags
        .filter(dsl::name.eq(name))
        .first::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_tag(entity))
}

fn all_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .order_by(dsl::name)
        .load::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_tag)
        .collect())
}

fn count_tags(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
