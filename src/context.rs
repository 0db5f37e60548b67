//! Application Context
//!
//! Shared state provided via Leptos Context API: backend settings, the auth
//! session holder and the list reload trigger.

use leptos::prelude::*;

use goal_store::auth::{Session, User};
use goal_store::BackendConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<BackendConfig>,
    /// Current session (None = signed out) - read
    pub session: ReadSignal<Option<Session>>,
    /// Current session - write
    set_session: WriteSignal<Option<Session>>,
    /// True until the initial session resolution finishes - read
    pub auth_loading: ReadSignal<bool>,
    set_auth_loading: WriteSignal<bool>,
    /// Trigger to refetch list items - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(config: BackendConfig) -> Self {
        let (session, set_session) = signal(None::<Session>);
        let (auth_loading, set_auth_loading) = signal(true);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            config: StoredValue::new(config),
            session,
            set_session,
            auth_loading,
            set_auth_loading,
            reload_trigger,
            set_reload_trigger,
        }
    }

    pub fn config(&self) -> BackendConfig {
        self.config.get_value()
    }

    /// Signed-in user, tracked
    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// Bearer token of the current session, untracked
    pub fn access_token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.as_ref().map(|s| s.access_token.clone()))
    }

    pub fn set_session(&self, session: Option<Session>) {
        self.set_session.set(session);
    }

    pub fn finish_auth_loading(&self) {
        self.set_auth_loading.set(false);
    }

    /// Trigger a refetch of list items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
