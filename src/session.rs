//! Session Persistence
//!
//! Keeps the auth session in `localStorage` so a reload stays signed in.

use goal_store::auth::Session;

const SESSION_KEY: &str = "goal-list.session";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_stored_session() -> Option<Session> {
    let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
    match Session::from_json(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("[AUTH] Discarding unreadable stored session: {}", e);
            clear_stored_session();
            None
        }
    }
}

pub fn store_session(session: &Session) {
    let Some(storage) = storage() else {
        log::warn!("[AUTH] localStorage unavailable; session will not survive reload");
        return;
    };
    match session.to_json() {
        Ok(raw) => {
            if let Err(e) = storage.set_item(SESSION_KEY, &raw) {
                log::error!("[AUTH] Failed to persist session: {:?}", e);
            }
        }
        Err(e) => log::error!("[AUTH] Failed to serialize session: {}", e),
    }
}

pub fn clear_stored_session() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
