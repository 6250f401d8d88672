use crate::models::Reaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionButton {
    Like,
    Dislike,
}

impl ReactionButton {
    #[inline]
    pub fn reaction(&self) -> Reaction {
        match self {
            Self::Like => Reaction::Like,
            Self::Dislike => Reaction::Dislike,
        }
    }
}

/// Pressing the button that is already active toggles it off; pressing the
/// other one switches directly, the server works out the net delta.
pub fn next_reaction(current: Reaction, pressed: ReactionButton) -> Reaction {
    if current == pressed.reaction() {
        Reaction::Neutral
    } else {
        pressed.reaction()
    }
}

/// A toggle request that has been sent but not yet answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingToggle {
    pub target: Reaction,
    pub previous: Reaction,
}

/// Reaction state of one comment for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionMachine {
    state: Reaction,
    pending: Option<PendingToggle>,
}

impl ReactionMachine {
    #[inline]
    pub fn state(&self) -> Reaction {
        self.state
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn is_active(&self, button: ReactionButton) -> bool {
        self.state == button.reaction()
    }

    /// Returns the request to send, or `None` while one is still in flight.
    pub fn press(&mut self, pressed: ReactionButton) -> Option<PendingToggle> {
        if self.pending.is_some() {
            tracing::debug!("reaction toggle already in flight, ignoring {pressed:?}");
            return None;
        }
        let toggle = PendingToggle {
            target: next_reaction(self.state, pressed),
            previous: self.state,
        };
        self.pending = Some(toggle);
        Some(toggle)
    }

    /// The server accepted the toggle.
    pub fn complete(&mut self) -> Reaction {
        if let Some(toggle) = self.pending.take() {
            self.state = toggle.target;
        }
        self.state
    }

    /// The request failed; keep the state we had before pressing.
    pub fn abandon(&mut self) -> Reaction {
        self.pending = None;
        self.state
    }

    pub fn button_label(&self, button: ReactionButton) -> &'static str {
        match (self.is_pending(), button) {
            (true, _) => "...",
            (false, ReactionButton::Like) => "Like",
            (false, ReactionButton::Dislike) => "Dislike",
        }
    }
}
