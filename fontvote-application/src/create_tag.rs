use super::*;

pub fn create_tag(connections: &sqlite::Connections, name: &str) -> Result<Tag> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_tag(conn, name).map_err(|err| {
            log::warn!("Failed to create tag '{name}': {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_and_list_tags() {
        let fixture = BackendFixture::new();
        flows::create_tag(&fixture.db_connections, " Serif ").unwrap();
        flows::create_tag(&fixture.db_connections, "Display").unwrap();
        let catalog = flows::load_catalog(&fixture.db_connections).unwrap();
        let names: Vec<_> = catalog.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Display", "Serif"]);
    }

    #[test]
    fn reject_empty_and_duplicate_names() {
        let fixture = BackendFixture::new();
        assert!(matches!(
            flows::create_tag(&fixture.db_connections, "  "),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::EmptyTagName
            )))
        ));
        flows::create_tag(&fixture.db_connections, "Serif").unwrap();
        assert!(matches!(
            flows::create_tag(&fixture.db_connections, "Serif"),
            Err(AppError::Business(BError::Parameter(usecases::Error::TagExists)))
        ));
    }
}
