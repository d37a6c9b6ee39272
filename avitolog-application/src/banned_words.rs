use super::*;

pub fn add_banned_word(
    connections: &memory::Connections,
    actor_id: &str,
    word: &str,
) -> Result<BannedWord> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::add_banned_word(conn, actor_id, word).map_err(|err| {
            log::warn!("Failed to add banned word: {err}");
            err
        })
    })?)
}

pub fn deactivate_banned_word(
    connections: &memory::Connections,
    actor_id: &str,
    word: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::deactivate_banned_word(conn, actor_id, word).map_err(|err| {
            log::warn!("Failed to deactivate banned word: {err}");
            err
        })
    })?)
}

/// Seeds the word list, e.g. from configuration at start-up.
pub fn import_banned_words<I>(connections: &memory::Connections, words: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let count = connections.exclusive()?.transaction(|conn| {
        usecases::import_banned_words(conn, words).map_err(|err| {
            log::warn!("Failed to import banned words: {err}");
            err
        })
    })?;
    log::info!("Imported {count} banned words");
    Ok(count)
}
