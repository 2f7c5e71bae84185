//! Network seams. No real backend exists; the stub implementation resolves
//! every call successfully after a simulated latency, and a future client
//! replaces it behind the same trait without touching store call sites.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote call failed: {0}")]
    Failed(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// The in-process stand-in for the content/admin backend.
#[async_trait::async_trait]
pub trait RemoteApi: Send + Sync {
    /// Polls for new published content. `true` means fresher content exists.
    async fn check_content_updates(&self) -> RemoteResult<bool>;
    /// Admin poll for pending moderation updates.
    async fn check_admin_updates(&self) -> RemoteResult<bool>;
    /// Pushes the local user record to the backend.
    async fn sync_user_data(&self) -> RemoteResult<()>;
    /// Publishes locally edited content for other devices.
    async fn publish_content_update(&self) -> RemoteResult<()>;
}

/// Always-succeeding stub with configurable simulated latency per call.
pub struct StubRemoteApi {
    pub content_check_delay: Duration,
    pub admin_check_delay: Duration,
    pub user_sync_delay: Duration,
    pub publish_delay: Duration,
}

impl Default for StubRemoteApi {
    fn default() -> Self {
        Self {
            content_check_delay: Duration::from_millis(1000),
            admin_check_delay: Duration::from_millis(1000),
            user_sync_delay: Duration::ZERO,
            publish_delay: Duration::from_millis(1500),
        }
    }
}

impl StubRemoteApi {
    /// Stub with no simulated latency, for tests.
    pub fn instant() -> Self {
        Self {
            content_check_delay: Duration::ZERO,
            admin_check_delay: Duration::ZERO,
            user_sync_delay: Duration::ZERO,
            publish_delay: Duration::ZERO,
        }
    }
}

#[async_trait::async_trait]
impl RemoteApi for StubRemoteApi {
    async fn check_content_updates(&self) -> RemoteResult<bool> {
        tokio::time::sleep(self.content_check_delay).await;
        Ok(true)
    }

    async fn check_admin_updates(&self) -> RemoteResult<bool> {
        tokio::time::sleep(self.admin_check_delay).await;
        Ok(true)
    }

    async fn sync_user_data(&self) -> RemoteResult<()> {
        tokio::time::sleep(self.user_sync_delay).await;
        Ok(())
    }

    async fn publish_content_update(&self) -> RemoteResult<()> {
        tokio::time::sleep(self.publish_delay).await;
        Ok(())
    }
}

/// Host platform, as far as this crate cares: publishing reloads the app
/// everywhere except the web build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Ios,
    Android,
}

impl Platform {
    pub fn is_web(self) -> bool {
        self == Platform::Web
    }
}

/// Collaborator effect: asks the host shell to restart the app so freshly
/// published content is picked up.
pub trait AppReloader: Send + Sync {
    fn request_reload(&self);
}

/// Default reloader that does nothing (web build, tests).
#[derive(Default)]
pub struct NoopReloader;

impl AppReloader for NoopReloader {
    fn request_reload(&self) {}
}
