//! Browser Navigation
//!
//! Reads the current route from `window.location` and performs redirects.

use goal_store::route::Route;

/// Route for the page currently loaded
pub fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Home;
    };
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    Route::parse(&path, &search)
}

/// Full page navigation; the session survives in local storage.
pub fn navigate(route: &Route) {
    let href = route.href();
    log::debug!("[NAV] -> {}", href);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(&href) {
            log::error!("[NAV] Failed to navigate to {}: {:?}", href, e);
        }
    }
}
