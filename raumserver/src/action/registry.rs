//! Action name to handler mapping.

use super::{
    Action, GetRendererStateAction, GetVersionAction, MuteAction, NextAction, PauseAction,
    PlayAction, PrevAction, SetVolumeAction, StopAction,
};

/// Every action the server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Next,
    Prev,
    Play,
    Pause,
    Stop,
    SetVolume,
    Mute,
    Unmute,
    GetRendererState,
    GetVersion,
}

impl ActionKind {
    pub const ALL: [ActionKind; 10] = [
        ActionKind::Next,
        ActionKind::Prev,
        ActionKind::Play,
        ActionKind::Pause,
        ActionKind::Stop,
        ActionKind::SetVolume,
        ActionKind::Mute,
        ActionKind::Unmute,
        ActionKind::GetRendererState,
        ActionKind::GetVersion,
    ];

    /// Name used in the request path
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Next => "next",
            ActionKind::Prev => "prev",
            ActionKind::Play => "play",
            ActionKind::Pause => "pause",
            ActionKind::Stop => "stop",
            ActionKind::SetVolume => "setVolume",
            ActionKind::Mute => "mute",
            ActionKind::Unmute => "unmute",
            ActionKind::GetRendererState => "getRendererState",
            ActionKind::GetVersion => "getVersion",
        }
    }

    /// Case-sensitive lookup by path name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// New handler for this action.
    pub fn create(self) -> Box<dyn Action> {
        match self {
            ActionKind::Next => Box::new(NextAction),
            ActionKind::Prev => Box::new(PrevAction),
            ActionKind::Play => Box::new(PlayAction),
            ActionKind::Pause => Box::new(PauseAction),
            ActionKind::Stop => Box::new(StopAction),
            ActionKind::SetVolume => Box::new(SetVolumeAction),
            ActionKind::Mute => Box::new(MuteAction::mute()),
            ActionKind::Unmute => Box::new(MuteAction::unmute()),
            ActionKind::GetRendererState => Box::new(GetRendererStateAction),
            ActionKind::GetVersion => Box::new(GetVersionAction),
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Handler for the named action, or `None` if no such action exists.
pub fn new_from_action(name: &str) -> Option<Box<dyn Action>> {
    ActionKind::from_name(name).map(ActionKind::create)
}
