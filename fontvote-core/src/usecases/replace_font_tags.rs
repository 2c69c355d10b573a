use std::collections::BTreeSet;

use super::prelude::*;

/// Replaces the tags of a font by the given selection.
///
/// Only the difference to the current assignment is written.
/// Callers must run this inside a single transaction to replace
/// the assignment atomically.
pub fn replace_font_tags<R>(repo: &R, font_id: FontId, tag_ids: &[TagId]) -> Result<()>
where
    R: FontRepo + TagRepo + FontTagRepo,
{
    let font = repo.get_font(font_id)?;
    let known: BTreeSet<TagId> = repo.all_tags()?.into_iter().map(|t| t.id).collect();
    let selected: BTreeSet<TagId> = tag_ids.iter().copied().collect();
    if let Some(unknown) = selected.difference(&known).next() {
        log::info!("Refusing to assign unknown tag {unknown} to font {font_id}");
        return Err(Error::UnknownTag);
    }
    let current: BTreeSet<TagId> = repo.load_tag_ids_of_font(font_id)?.into_iter().collect();
    let removed: Vec<_> = current.difference(&selected).copied().collect();
    let added: Vec<_> = selected.difference(&current).copied().collect();
    if !removed.is_empty() {
        repo.remove_font_tags(font_id, &removed)?;
    }
    if !added.is_empty() {
        repo.add_font_tags(font_id, &added)?;
    }
    log::info!(
        "Updated tags of font {} ({}): {} added, {} removed",
        font_id,
        font.name,
        added.len(),
        removed.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;
    use crate::repositories::Error as RepoError;
    use fontvote_entities::builders::*;

    fn setup() -> (MockDb, Vec<TagId>) {
        let db = MockDb::default();
        db.fonts.borrow_mut().push(Font::build().id(1).finish());
        let ids = ["Serif", "Display", "Sans"]
            .into_iter()
            .map(|n| db.create_tag(n).unwrap().id)
            .collect();
        (db, ids)
    }

    fn tags_of(db: &MockDb) -> BTreeSet<TagId> {
        db.load_tag_ids_of_font(FontId::new(1))
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn replace_with_diff() {
        let (db, ids) = setup();
        replace_font_tags(&db, FontId::new(1), &[ids[0], ids[1]]).unwrap();
        assert_eq!(tags_of(&db), [ids[0], ids[1]].into_iter().collect());

        replace_font_tags(&db, FontId::new(1), &[ids[1], ids[2]]).unwrap();
        assert_eq!(tags_of(&db), [ids[1], ids[2]].into_iter().collect());

        replace_font_tags(&db, FontId::new(1), &[]).unwrap();
        assert!(tags_of(&db).is_empty());
    }

    #[test]
    fn reject_unknown_tags_without_changes() {
        let (db, ids) = setup();
        replace_font_tags(&db, FontId::new(1), &[ids[0]]).unwrap();
        let err = replace_font_tags(&db, FontId::new(1), &[ids[1], TagId::new(999)]).unwrap_err();
        assert!(matches!(err, Error::UnknownTag));
        assert_eq!(tags_of(&db), [ids[0]].into_iter().collect());
    }

    #[test]
    fn reject_unknown_font() {
        let (db, ids) = setup();
        let err = replace_font_tags(&db, FontId::new(2), &[ids[0]]).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
    }
}
