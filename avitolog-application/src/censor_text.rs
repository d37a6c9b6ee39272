use super::*;

/// Censors the text with the currently active banned words
/// without storing anything.
pub fn censor_text(connections: &memory::Connections, text: &str) -> Result<String> {
    let db = connections.shared()?;
    Ok(usecases::censor_text(&db, text).map_err(|err| {
        log::warn!("Failed to censor text: {err}");
        err
    })?)
}
