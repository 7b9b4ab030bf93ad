//! Session persistence: username and role live in browser session storage,
//! so the signed-in state ends with the tab.

use contracts::system::auth::SessionUser;
use web_sys::window;

const USERNAME_KEY: &str = "hotel_usuario";
const ROLE_KEY: &str = "hotel_rol";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

pub fn save_session(user: &SessionUser) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(USERNAME_KEY, &user.username);
        let _ = storage.set_item(ROLE_KEY, &user.role);
    }
}

pub fn get_username() -> Option<String> {
    get_session_storage()?.get_item(USERNAME_KEY).ok()?
}

/// Read the current role. Deliberately not cached: the role gate re-reads
/// session storage on every navigation.
pub fn get_role() -> Option<String> {
    get_session_storage()?.get_item(ROLE_KEY).ok()?
}

pub fn load_session() -> Option<SessionUser> {
    let username = get_username()?;
    let role = get_role()?;
    Some(SessionUser { username, role })
}

pub fn clear_session() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(USERNAME_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
