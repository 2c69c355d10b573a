use super::*;

pub fn add_font(
    connections: &sqlite::Connections,
    params: usecases::NewFontParams,
) -> Result<Font> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let name = params.name.clone();
        usecases::add_font(conn, params).map_err(|err| {
            log::warn!("Failed to add font '{name}': {err}");
            err
        })
    })?)
}
