use super::*;

impl FontTagRepo for DbReadOnly<'_> {
    fn all_font_tags(&self) -> Result<Vec<FontTag>> {
        all_font_tags(&mut self.conn.borrow_mut())
    }
    fn load_tag_ids_of_font(&self, font_id: FontId) -> Result<Vec<TagId>> {
        load_tag_ids_of_font(&mut self.conn.borrow_mut(), font_id)
    }
    fn add_font_tags(&self, _font_id: FontId, _tag_ids: &[TagId]) -> Result<usize> {
        Err(read_only_err())
    }
    fn remove_font_tags(&self, _font_id: FontId, _tag_ids: &[TagId]) -> Result<usize> {
        Err(read_only_err())
    }
}

impl FontTagRepo for DbReadWrite<'_> {
    fn all_font_tags(&self) -> Result<Vec<FontTag>> {
        all_font_tags(&mut self.conn.borrow_mut())
    }
    fn load_tag_ids_of_font(&self, font_id: FontId) -> Result<Vec<TagId>> {
        load_tag_ids_of_font(&mut self.conn.borrow_mut(), font_id)
    }
    fn add_font_tags(&self, font_id: FontId, tag_ids: &[TagId]) -> Result<usize> {
        add_font_tags(&mut self.conn.borrow_mut(), font_id, tag_ids)
    }
    fn remove_font_tags(&self, font_id: FontId, tag_ids: &[TagId]) -> Result<usize> {
        remove_font_tags(&mut self.conn.borrow_mut(), font_id, tag_ids)
    }
}

impl FontTagRepo for DbConnection<'_> {
    fn all_font_tags(&self) -> Result<Vec<FontTag>> {
        all_font_tags(&mut self.conn.borrow_mut())
    }
    fn load_tag_ids_of_font(&self, font_id: FontId) -> Result<Vec<TagId>> {
        load_tag_ids_of_font(&mut self.conn.borrow_mut(), font_id)
    }
    fn add_font_tags(&self, font_id: FontId, tag_ids: &[TagId]) -> Result<usize> {
        add_font_tags(&mut self.conn.borrow_mut(), font_id, tag_ids)
    }
    fn remove_font_tags(&self, font_id: FontId, tag_ids: &[TagId]) -> Result<usize> {
        remove_font_tags(&mut self.conn.borrow_mut(), font_id, tag_ids)
    }
}

fn all_font_tags(conn: &mut SqliteConnection) -> Result<Vec<FontTag>> {
    use schema::font_tags::dsl;
    Ok(dsl::font_tags
        .order_by((dsl::font_id, dsl::tag_id))
        .load::<models::FontTag>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::FontTag { font_id, tag_id }| FontTag {
            font_id: font_id.into(),
            tag_id: tag_id.into(),
        })
        .collect())
}

fn load_tag_ids_of_font(conn: &mut SqliteConnection, font_id: FontId) -> Result<Vec<TagId>> {
    use schema::font_tags::dsl;
    Ok(dsl::font_tags
        .select(dsl::tag_id)
        .filter(dsl::font_id.eq(font_id.get()))
        .order_by(dsl::tag_id)
        .load::<i64>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TagId::from)
        .collect())
}

fn add_font_tags(conn: &mut SqliteConnection, font_id: FontId, tag_ids: &[TagId]) -> Result<usize> {
    let models: Vec<_> = tag_ids
        .iter()
        .map(|tag_id| models::FontTag {
            font_id: font_id.get(),
            tag_id: tag_id.get(),
        })
        .collect();
    let mut count = 0;
    for model in &models {
        count += diesel::insert_into(schema::font_tags::table)
            .values(model)
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(count)
}

fn remove_font_tags(
    conn: &mut SqliteConnection,
    font_id: FontId,
    tag_ids: &[TagId],
) -> Result<usize> {
    use schema::font_tags::dsl;
    let tag_ids: Vec<i64> = tag_ids.iter().map(|id| id.get()).collect();
    diesel::delete(
        dsl::font_tags
            .filter(dsl::font_id.eq(font_id.get()))
            .filter(dsl::tag_id.eq_any(tag_ids)),
    )
    .execute(conn)
    .map_err(from_diesel_err)
}
