//! Confirmation gate for destructive bulk deletion.

/// States of the delete-all confirmation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    ConfirmPending,
}

/// Two-state machine guarding delete-all.
///
/// A request arms the gate; confirm or cancel disarms it. Requesting again
/// while armed changes nothing, so a single confirm never stands for two
/// requests.
#[derive(Debug, Default)]
pub struct ConfirmGate {
    state: ConfirmState,
}

impl ConfirmGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConfirmState {
        self.state
    }

    /// Arm the gate; returns false when it was already armed
    pub fn request(&mut self) -> bool {
        match self.state {
            ConfirmState::Idle => {
                self.state = ConfirmState::ConfirmPending;
                true
            }
            ConfirmState::ConfirmPending => false,
        }
    }

    /// Disarm the gate; returns true when a request was actually pending
    pub fn confirm(&mut self) -> bool {
        let pending = self.state == ConfirmState::ConfirmPending;
        self.state = ConfirmState::Idle;
        pending
    }

    /// Disarm the gate without acting
    pub fn cancel(&mut self) {
        self.state = ConfirmState::Idle;
    }
}
