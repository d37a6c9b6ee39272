use super::*;

pub fn create_listing(
    connections: &memory::Connections,
    new_listing: usecases::NewListing,
) -> Result<Listing> {
    let url = new_listing.url.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_listing(conn, new_listing).map_err(|err| {
            log::warn!("Failed to create listing {url}: {err}");
            err
        })
    })?)
}

pub fn view_listing(connections: &memory::Connections, id: &str) -> Result<Listing> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::view_listing(conn, id).map_err(|err| {
            log::warn!("Failed to view listing {id}: {err}");
            err
        })
    })?)
}
