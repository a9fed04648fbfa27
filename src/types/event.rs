use serde::{Deserialize, Serialize};

/// Lifecycle events a host forwards for a tracked window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum WindowEvent {
    Move,
    Resize,
    /// The host has begun closing the window. Cannot be cancelled.
    Close,
    /// The host has torn the window down.
    Closed,
    AlwaysOnTopChanged { always_on_top: bool },
}

impl WindowEvent {
    pub fn kind(&self) -> WindowEventKind {
        match self {
            WindowEvent::Move => WindowEventKind::Move,
            WindowEvent::Resize => WindowEventKind::Resize,
            WindowEvent::Close => WindowEventKind::Close,
            WindowEvent::Closed => WindowEventKind::Closed,
            WindowEvent::AlwaysOnTopChanged { .. } => WindowEventKind::AlwaysOnTopChanged,
        }
    }
}

/// Payload-free discriminant of [`WindowEvent`], used as a listener key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowEventKind {
    Move,
    Resize,
    Close,
    Closed,
    AlwaysOnTopChanged,
}

impl WindowEventKind {
    pub const ALL: [WindowEventKind; 5] = [
        WindowEventKind::Move,
        WindowEventKind::Resize,
        WindowEventKind::Close,
        WindowEventKind::Closed,
        WindowEventKind::AlwaysOnTopChanged,
    ];

    /// Host event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowEventKind::Move => "move",
            WindowEventKind::Resize => "resize",
            WindowEventKind::Close => "close",
            WindowEventKind::Closed => "closed",
            WindowEventKind::AlwaysOnTopChanged => "always-on-top-changed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}
