//! Input mode state machine.
//!
//! The leader pane only exists inside [`ModeState::Mirror`], so "leader set
//! while not mirroring" cannot be represented. All changes go through
//! [`ModeState::apply`].

use multinav_common::InputMode;

/// Requested change to the mode/leader pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    Control,
    /// Enter mirror mode, keeping the current leader if already mirroring.
    Mirror,
    /// Enter mirror mode with this leader.
    MirrorFrom(usize),
    /// Drop the leader without leaving the current mode.
    ClearLeader,
    None,
}

impl From<InputMode> for InputIntent {
    fn from(mode: InputMode) -> Self {
        match mode {
            InputMode::Control => InputIntent::Control,
            InputMode::Mirror => InputIntent::Mirror,
            InputMode::None => InputIntent::None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModeState {
    #[default]
    Control,
    Mirror {
        leader: Option<usize>,
    },
    None,
}

impl ModeState {
    pub fn from_mode(mode: InputMode) -> Self {
        Self::default().apply(mode.into())
    }

    /// The single transition function for mode and leader.
    #[must_use]
    pub fn apply(self, intent: InputIntent) -> Self {
        match intent {
            InputIntent::Control => ModeState::Control,
            InputIntent::None => ModeState::None,
            InputIntent::Mirror => ModeState::Mirror {
                leader: self.leader(),
            },
            InputIntent::MirrorFrom(pane) => ModeState::Mirror {
                leader: Some(pane),
            },
            InputIntent::ClearLeader => match self {
                ModeState::Mirror { .. } => ModeState::Mirror { leader: None },
                other => other,
            },
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            ModeState::Control => InputMode::Control,
            ModeState::Mirror { .. } => InputMode::Mirror,
            ModeState::None => InputMode::None,
        }
    }

    pub fn leader(&self) -> Option<usize> {
        match self {
            ModeState::Mirror { leader } => *leader,
            ModeState::Control | ModeState::None => None,
        }
    }
}
