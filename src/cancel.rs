//! Cooperative interrupt handling
//!
//! Ctrl-C does not stop the update loop directly. The signal handler sends a
//! token over a channel and the loop drains it between bundles. A running
//! `git pull` is not waited on or killed by the token.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use crate::error::Result;

/// Interrupt requests queued by the signal handler
#[derive(Debug)]
pub struct CancelToken {
    requests: Receiver<()>,
}

impl CancelToken {
    /// Install the Ctrl-C handler and return the token it feeds
    pub fn from_ctrl_c() -> Result<Self> {
        let (sender, token) = Self::channel();
        ctrlc::set_handler(move || {
            // The receiver is gone once the command has finished
            let _ = sender.send(());
        })?;
        debug!("Installed interrupt handler");
        Ok(token)
    }

    /// A token fed by the returned sender instead of a signal handler
    pub fn channel() -> (Sender<()>, Self) {
        let (sender, requests) = mpsc::channel();
        (sender, Self { requests })
    }

    /// Whether an interrupt has been requested since the last check
    pub fn is_cancelled(&self) -> bool {
        let mut cancelled = false;
        while self.requests.try_recv().is_ok() {
            cancelled = true;
        }
        cancelled
    }
}
