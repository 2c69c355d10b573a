use super::*;

impl FontRepo for DbReadOnly<'_> {
    fn create_font(&self, _font: &NewFont) -> Result<Font> {
        Err(read_only_err())
    }
    fn get_font(&self, id: FontId) -> Result<Font> {
        get_font(&mut self.conn.borrow_mut(), id)
    }
    fn all_fonts(&self) -> Result<Vec<Font>> {
        all_fonts(&mut self.conn.borrow_mut())
    }
    fn count_fonts(&self) -> Result<usize> {
        count_fonts(&mut self.conn.borrow_mut())
    }
}

impl FontRepo for DbReadWrite<'_> {
    fn create_font(&self, font: &NewFont) -> Result<Font> {
        create_font(&mut self.conn.borrow_mut(), font)
    }
    fn get_font(&self, id: FontId) -> Result<Font> {
        get_font(&mut self.conn.borrow_mut(), id)
    }
    fn all_fonts(&self) -> Result<Vec<Font>> {
        all_fonts(&mut self.conn.borrow_mut())
    }
    fn count_fonts(&self) -> Result<usize> {
        count_fonts(&mut self.conn.borrow_mut())
    }
}

impl FontRepo for DbConnection<'_> {
    fn create_font(&self, font: &NewFont) -> Result<Font> {
        create_font(&mut self.conn.borrow_mut(), font)
    }
    fn get_font(&self, id: FontId) -> Result<Font> {
        get_font(&mut self.conn.borrow_mut(), id)
    }
    fn all_fonts(&self) -> Result<Vec<Font>> {
        all_fonts(&mut self.conn.borrow_mut())
    }
    fn count_fonts(&self) -> Result<usize> {
        count_fonts(&mut self.conn.borrow_mut())
    }
}

fn create_font(conn: &mut SqliteConnection, font: &NewFont) -> Result<Font> {
    use schema::fonts::dsl;
    let model = models::NewFont {
        name: &font.name,
        url: font.url.as_str(),
    };
    diesel::insert_into(schema::fonts::table)
        .values(&model)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let entity = dsl::fonts
        .filter(dsl::name.eq(&font.name))
        .first::<models::FontEntity>(conn)
        .map_err(from_diesel_err)?;
    load_font(entity)
}

fn get_font(conn: &mut SqliteConnection, id: FontId) -> Result<Font> {
    use schema::fonts::dsl;
    let entity = dsl::fonts
        .filter(dsl::id.eq(id.get()))
        .first::<models::FontEntity>(conn)
        .map_err(from_diesel_err)?;
    load_font(entity)
}

fn all_fonts(conn: &mut SqliteConnection) -> Result<Vec<Font>> {
    use schema::fonts::dsl;
    dsl::fonts
        .order_by(dsl::id)
        .load::<models::FontEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_font)
        .collect()
}

fn count_fonts(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::fonts::dsl;
    Ok(dsl::fonts
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
