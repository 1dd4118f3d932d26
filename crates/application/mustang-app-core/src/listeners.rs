use std::sync::mpsc;

use mustang_core::{Action, LaunchResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    pub action: Action,
    pub result: LaunchResult,
}

/// Optional subscriber to dispatch outcomes, e.g. an on-screen status line.
pub trait OutcomeListener: Send + 'static {
    fn on_outcome(&self, action: Action, result: &LaunchResult);
}

/// Hands outcomes to another part of the program over a channel.
pub struct ChannelListener {
    tx: mpsc::Sender<DispatchOutcome>,
}

impl ChannelListener {
    pub fn new() -> (Self, mpsc::Receiver<DispatchOutcome>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl OutcomeListener for ChannelListener {
    fn on_outcome(&self, action: Action, result: &LaunchResult) {
        // Nobody listening is fine; the status line is optional.
        let _ = self.tx.send(DispatchOutcome {
            action,
            result: result.clone(),
        });
    }
}
