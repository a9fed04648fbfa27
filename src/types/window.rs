use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Width used when neither the config nor the defaults carry one.
pub const FALLBACK_WIDTH: i32 = 900;
/// Height used when neither the config nor the defaults carry one.
pub const FALLBACK_HEIGHT: i32 = 670;

/// Creation-time intent for a window.
///
/// Every field is optional so configs can be layered: defaults, then saved
/// geometry, then the caller's explicit values (see [`WindowConfig::overlay`]).
/// Unknown keys are kept in `extra` and passed through to the host untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullscreenable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_on_top: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_hide_menu_bar: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_preferences: Option<WebPreferences>,

    /// Host-specific options passed through verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl WindowConfig {
    /// A config carrying only a window name.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// The built-in defaults for a main application window.
    pub fn main_window_defaults() -> Self {
        Self {
            name: Some("mainWindow".to_string()),
            width: Some(FALLBACK_WIDTH),
            height: Some(FALLBACK_HEIGHT),
            min_width: Some(800),
            min_height: Some(600),
            resizable: Some(true),
            movable: Some(true),
            minimizable: Some(true),
            maximizable: Some(true),
            closable: Some(true),
            fullscreenable: Some(true),
            always_on_top: Some(false),
            ..Self::default()
        }
    }

    /// Returns `self` with every field set in `top` replaced by `top`'s value.
    ///
    /// `extra` maps are merged key by key, `top` winning on collisions; web
    /// preferences are overlaid field by field the same way.
    pub fn overlay(&self, top: &WindowConfig) -> WindowConfig {
        let mut extra = self.extra.clone();
        extra.extend(top.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        let web_preferences = match (&self.web_preferences, &top.web_preferences) {
            (Some(base), Some(over)) => Some(base.overlay(over)),
            (base, over) => over.clone().or_else(|| base.clone()),
        };

        WindowConfig {
            id: top.id.clone().or_else(|| self.id.clone()),
            name: top.name.clone().or_else(|| self.name.clone()),
            width: top.width.or(self.width),
            height: top.height.or(self.height),
            x: top.x.or(self.x),
            y: top.y.or(self.y),
            min_width: top.min_width.or(self.min_width),
            min_height: top.min_height.or(self.min_height),
            max_width: top.max_width.or(self.max_width),
            max_height: top.max_height.or(self.max_height),
            resizable: top.resizable.or(self.resizable),
            movable: top.movable.or(self.movable),
            minimizable: top.minimizable.or(self.minimizable),
            maximizable: top.maximizable.or(self.maximizable),
            closable: top.closable.or(self.closable),
            fullscreen: top.fullscreen.or(self.fullscreen),
            fullscreenable: top.fullscreenable.or(self.fullscreenable),
            always_on_top: top.always_on_top.or(self.always_on_top),
            title: top.title.clone().or_else(|| self.title.clone()),
            icon: top.icon.clone().or_else(|| self.icon.clone()),
            show: top.show.or(self.show),
            auto_hide_menu_bar: top.auto_hide_menu_bar.or(self.auto_hide_menu_bar),
            web_preferences,
            extra,
        }
    }

    /// Width to use for layout decisions when the config leaves it unset.
    pub fn effective_width(&self) -> i32 {
        self.width.unwrap_or(FALLBACK_WIDTH)
    }

    /// Height to use for layout decisions when the config leaves it unset.
    pub fn effective_height(&self) -> i32 {
        self.height.unwrap_or(FALLBACK_HEIGHT)
    }
}

/// Renderer isolation options handed to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WebPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_integration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preload: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl WebPreferences {
    /// Isolated renderer: no node integration, context isolation on, sandboxed.
    pub fn secure_defaults() -> Self {
        Self {
            node_integration: Some(false),
            context_isolation: Some(true),
            sandbox: Some(true),
            ..Self::default()
        }
    }

    pub fn overlay(&self, top: &WebPreferences) -> WebPreferences {
        let mut extra = self.extra.clone();
        extra.extend(top.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        WebPreferences {
            node_integration: top.node_integration.or(self.node_integration),
            context_isolation: top.context_isolation.or(self.context_isolation),
            sandbox: top.sandbox.or(self.sandbox),
            preload: top.preload.clone().or_else(|| self.preload.clone()),
            extra,
        }
    }
}

/// Persisted snapshot of one window's geometry and flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WindowState {
    pub id: String,
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub is_fullscreen: bool,
    pub always_on_top: bool,
}

impl WindowState {
    /// The part of a saved state that is restored on the next creation.
    pub fn restore_overlay(&self) -> WindowConfig {
        WindowConfig {
            width: Some(self.width),
            height: Some(self.height),
            x: Some(self.x),
            y: Some(self.y),
            always_on_top: Some(self.always_on_top),
            ..WindowConfig::default()
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Primary lifecycle state of a tracked window.
///
/// Maximized, minimized, fullscreen and always-on-top are orthogonal flags
/// queried from the handle, not phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowPhase {
    Created,
    Shown,
    Hidden,
    Closing,
}

/// Read-only view of a tracked window for enumeration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    pub id: String,
    pub name: String,
    pub is_visible: bool,
    pub is_focused: bool,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub is_always_on_top: bool,
}

/// Where a window's renderer content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "location", rename_all = "camelCase")]
pub enum ContentSource {
    Url(String),
    File(String),
}
