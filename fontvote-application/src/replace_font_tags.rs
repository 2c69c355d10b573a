use super::*;

/// Replaces all tags of a font within a single transaction.
pub fn replace_font_tags(
    connections: &sqlite::Connections,
    font_id: FontId,
    tag_ids: &[TagId],
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::replace_font_tags(conn, font_id, tag_ids).map_err(|err| {
            log::warn!("Failed to replace tags of font {font_id}: {err}");
            err
        })
    })?)
}
