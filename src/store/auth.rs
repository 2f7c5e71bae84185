//! Demo session store. Login is a stub that always installs the fixed demo
//! user; the admin "network" operations run through the injected remote
//! seam and keep the error-to-boolean shape the screens branch on.

use crate::model::{now_iso, User};
use crate::remote::{AppReloader, Platform, RemoteApi};
use crate::storage::{Flusher, StateStorage, StorageResult};
use log::{info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// The persisted session record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub token: Option<String>,
    pub last_sync: Option<String>,
}

fn demo_user() -> User {
    User {
        id: "1".to_string(),
        email: "user@example.com".to_string(),
        name: "Демо Пользователь".to_string(),
        avatar: None,
        is_admin: false,
        purchased_courses: vec!["2".to_string()],
        purchased_meditations: vec!["1".to_string(), "3".to_string()],
        favorites: vec!["1".to_string(), "3".to_string(), "5".to_string()],
        created_at: now_iso(),
    }
}

pub struct AuthStore {
    state: RwLock<AuthState>,
    remote: Arc<dyn RemoteApi>,
    reloader: Arc<dyn AppReloader>,
    platform: Platform,
    flusher: Flusher,
}

impl AuthStore {
    pub async fn open(
        storage: Arc<dyn StateStorage>,
        remote: Arc<dyn RemoteApi>,
        reloader: Arc<dyn AppReloader>,
        platform: Platform,
    ) -> StorageResult<Self> {
        let state = match storage.load(AUTH_STORAGE_KEY).await? {
            Some(raw) => match serde_json::from_str::<AuthState>(&raw) {
                Ok(state) => state,
                Err(err) => {
                    warn!("discarding unreadable session record: {err}");
                    AuthState::default()
                }
            },
            None => AuthState::default(),
        };
        Ok(Self {
            state: RwLock::new(state),
            remote,
            reloader,
            platform,
            flusher: Flusher::spawn(storage, AUTH_STORAGE_KEY),
        })
    }

    pub async fn flush(&self) {
        self.flusher.flush().await;
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.state.read().is_admin
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    pub fn last_sync(&self) -> Option<String> {
        self.state.read().last_sync.clone()
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.read().clone()
    }

    fn commit(&self, mutate: impl FnOnce(&mut AuthState)) {
        let snapshot = {
            let mut state = self.state.write();
            mutate(&mut state);
            serde_json::to_string(&*state)
        };
        match snapshot {
            Ok(snapshot) => self.flusher.schedule(snapshot),
            Err(err) => warn!("session snapshot serialization failed: {err}"),
        }
    }

    /// Demo login: credentials are ignored and the fixed demo user signs in
    /// with a fresh opaque session token.
    pub async fn login(&self, _email: &str, _password: &str) -> bool {
        let user = demo_user();
        info!("demo login as {}", user.email);
        self.commit(|state| {
            state.is_admin = user.is_admin;
            state.token = Some(format!("demo-token-{}", Uuid::new_v4().simple()));
            state.last_sync = Some(now_iso());
            state.is_authenticated = true;
            state.user = Some(user);
        });
        true
    }

    /// Clears the session. `lastSync` is deliberately left in place.
    pub fn logout(&self) {
        self.commit(|state| {
            state.user = None;
            state.is_authenticated = false;
            state.is_admin = false;
            state.token = None;
        });
    }

    /// Debug affordance: flips the demo user's admin bit. Not an
    /// authorization mechanism. No-op while signed out.
    pub fn toggle_admin(&self) {
        self.commit(|state| {
            if let Some(user) = state.user.as_mut() {
                user.is_admin = !user.is_admin;
                state.is_admin = user.is_admin;
                state.last_sync = Some(now_iso());
            }
        });
    }

    /// Pushes the local user record through the remote seam and stamps
    /// `lastSync` on success.
    pub async fn sync_user_data(&self) -> bool {
        match self.remote.sync_user_data().await {
            Ok(()) => {
                self.commit(|state| state.last_sync = Some(now_iso()));
                true
            }
            Err(err) => {
                warn!("user data sync failed: {err}");
                false
            }
        }
    }

    /// Admin-only poll for pending updates; non-admins get `false` without
    /// touching the network seam.
    pub async fn check_admin_updates(&self) -> bool {
        if !self.is_admin() {
            return false;
        }
        match self.remote.check_admin_updates().await {
            Ok(has_updates) => has_updates,
            Err(err) => {
                warn!("admin update check failed: {err}");
                false
            }
        }
    }

    /// Publishes locally edited content. On success stamps `lastSync` and,
    /// outside the web build, asks the host shell for a full reload so the
    /// published content is picked up.
    pub async fn publish_content_update(&self) -> bool {
        if !self.is_admin() {
            return false;
        }
        match self.remote.publish_content_update().await {
            Ok(()) => {
                self.commit(|state| state.last_sync = Some(now_iso()));
                if !self.platform.is_web() {
                    self.reloader.request_reload();
                }
                true
            }
            Err(err) => {
                warn!("content publish failed: {err}");
                false
            }
        }
    }
}
