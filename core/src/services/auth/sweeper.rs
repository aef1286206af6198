//! Background sweep of expired refresh tokens

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::repositories::principal::PrincipalRepository;
use crate::repositories::token::RefreshTokenRepository;

use super::manager::AuthManager;

/// Seconds between sweep cycles
pub const SWEEP_INTERVAL_SECONDS: u64 = 60;

/// Periodic sweep that deletes expired refresh tokens from the store
///
/// Runs as a spawned tokio task ticking at a fixed interval, with the first
/// cycle running immediately on start. A cycle whose store call fails is
/// logged and the loop keeps ticking.
///
/// Construct at boot, call [`start`](Self::start), keep the returned handle,
/// and call [`stop`](SweeperHandle::stop) on graceful shutdown.
pub struct ExpirySweeper<R, P>
where
    R: RefreshTokenRepository + 'static,
    P: PrincipalRepository + 'static,
{
    manager: Arc<AuthManager<R, P>>,
    interval: Duration,
}

impl<R, P> ExpirySweeper<R, P>
where
    R: RefreshTokenRepository + 'static,
    P: PrincipalRepository + 'static,
{
    /// Creates a sweeper with the default interval of
    /// [`SWEEP_INTERVAL_SECONDS`]
    pub fn new(manager: Arc<AuthManager<R, P>>) -> Self {
        Self::with_interval(manager, Duration::from_secs(SWEEP_INTERVAL_SECONDS))
    }

    /// Creates a sweeper with a custom interval
    ///
    /// # Arguments
    ///
    /// * `manager` - The auth manager whose store is swept
    /// * `interval` - Time between sweep cycles
    pub fn with_interval(manager: Arc<AuthManager<R, P>>, interval: Duration) -> Self {
        Self { manager, interval }
    }

    /// Spawns the sweep loop
    ///
    /// The first cycle runs immediately; later cycles follow at the
    /// configured interval. The returned handle stops the loop.
    pub fn start(self) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let manager = self.manager;
        let period = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match manager.remove_expired_refresh_tokens(Utc::now()).await {
                            Ok(removed) if removed > 0 => {
                                info!("Swept {} expired refresh tokens", removed);
                            }
                            Ok(_) => {}
                            Err(e) => {
                                error!("Refresh token sweep failed: {}", e);
                            }
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        break;
                    }
                }
            }
        });

        SweeperHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Handle to a running sweep loop
pub struct SweeperHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stops the sweep loop and waits for the task to exit
    ///
    /// The pending timer is cancelled; a cycle already in flight finishes
    /// its store call before the task exits.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.task.await {
            error!("Sweeper task join failed: {}", e);
        }
    }
}
