use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::warn;

use wordgame_core::{GameSession, SessionStatus};

/// Drives a session clock from a background task, one tick per second.
///
/// The task stops on its own when the callback reports that the round
/// is no longer active, and `stop` aborts it immediately on quit or
/// navigation, so a finished session never keeps accumulating time.
pub struct SessionTimer {
    handle: JoinHandle<()>,
}

impl SessionTimer {
    /// Call `on_tick` once per second until it returns false.
    pub fn start<F>(mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut clock = interval(Duration::from_secs(1));
            clock.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval fires immediately;
            // swallow it so a round starts at zero seconds.
            clock.tick().await;

            loop {
                clock.tick().await;
                if !on_tick() {
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Tick a shared session while it stays active.
    pub fn for_session(session: Arc<Mutex<GameSession>>) -> Self {
        Self::start(move || match session.lock() {
            Ok(mut session) => {
                session.tick();
                session.status() == SessionStatus::Active
            }
            Err(_) => {
                warn!("session lock poisoned, stopping timer");
                false
            }
        })
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SessionTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
