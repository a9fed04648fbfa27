//! Window Session Manager.
//!
//! Creates windows from layered configs (defaults, then saved geometry, then
//! the caller's explicit values), keeps them on a visible display, tracks them
//! in the registry and persists their geometry as the host reports lifecycle
//! events.
//!
//! Each window moves through `Created -> {Shown <-> Hidden} -> Closing`, and
//! is forgotten once the host reports `closed`. The manager is the only writer
//! of the registry; everything runs on the host's event thread.
//!
//! Host events are routed by the handle that emitted them, not by id: an id
//! can be reopened while its previous window is still closing, and the old
//! window's late events must not touch the new one.

use log::{debug, info};
use uuid::Uuid;

use crate::host::{WindowHandle, WindowHost};
use crate::managers::window_registry::{WindowRegistry, WindowRegistryTrait};
use crate::services::backing_store::BackingStore;
use crate::services::bounds_validator;
use crate::services::geometry_store::{GeometryStore, GeometryStoreTrait};
use crate::types::errors::WindowError;
use crate::types::event::{WindowEvent, WindowEventKind};
use crate::types::geometry::Rect;
use crate::types::window::{
    ContentSource, WebPreferences, WindowConfig, WindowPhase, WindowState, WindowSummary,
};

/// Name recorded for windows created without one.
const UNNAMED_WINDOW: &str = "unknown";

/// What the manager does when a wired event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenerAction {
    /// Snapshot geometry and flags into the geometry store.
    Persist,
    /// Mark the window closing, then persist.
    PersistClosing,
    /// Drop the window from the registry and stop tracking it.
    Forget,
}

/// Listener table installed on every window at creation.
const LISTENERS: [(WindowEventKind, ListenerAction); 5] = [
    (WindowEventKind::Move, ListenerAction::Persist),
    (WindowEventKind::Resize, ListenerAction::Persist),
    (WindowEventKind::Close, ListenerAction::PersistClosing),
    (WindowEventKind::Closed, ListenerAction::Forget),
    (WindowEventKind::AlwaysOnTopChanged, ListenerAction::Persist),
];

/// Per-window state kept from creation until the host reports `closed`.
///
/// Outlives the registry entry: a close request removes the registry entry
/// at once, but the final `close` snapshot still needs the handle.
struct Lifecycle<W> {
    id: String,
    name: String,
    handle: W,
    phase: WindowPhase,
    listeners: Vec<(WindowEventKind, ListenerAction)>,
}

impl<W> Lifecycle<W> {
    fn action_for(&self, kind: WindowEventKind) -> Option<ListenerAction> {
        self.listeners
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, action)| *action)
    }
}

/// Trait defining window session operations.
pub trait WindowManagerTrait {
    type Handle: WindowHandle;

    fn create_window(&mut self, config: WindowConfig) -> Result<Self::Handle, WindowError>;
    fn dispatch(&mut self, source: &Self::Handle, event: WindowEvent);

    fn get_window(&self, id: &str) -> Option<&Self::Handle>;
    fn get_all_windows(&self) -> Vec<&Self::Handle>;
    fn get_window_by_name(&self, name: &str) -> Option<&Self::Handle>;

    fn show_window(&mut self, id: &str);
    fn hide_window(&mut self, id: &str);
    fn close_window(&mut self, id: &str);
    fn close_all_windows(&mut self);
    fn maximize_window(&mut self, id: &str);
    fn minimize_window(&mut self, id: &str);
    fn restore_window(&mut self, id: &str);
    fn toggle_maximize(&mut self, id: &str) -> Option<bool>;
    fn toggle_always_on_top(&mut self, id: &str) -> Option<bool>;

    fn window_bounds(&self, id: &str) -> Option<Rect>;
    fn window_summaries(&self) -> Vec<WindowSummary>;
    fn phase(&self, id: &str) -> Option<WindowPhase>;
}

/// Window session manager over a host and a geometry store.
pub struct WindowManager<H: WindowHost, B: BackingStore> {
    host: H,
    registry: WindowRegistry<H::Handle>,
    /// Oldest first. Several entries may share an id while older windows
    /// finish closing.
    lifecycles: Vec<Lifecycle<H::Handle>>,
    geometry: GeometryStore<B>,
    default_config: WindowConfig,
    content: ContentSource,
}

impl<H: WindowHost, B: BackingStore> WindowManager<H, B> {
    pub fn new(
        host: H,
        geometry: GeometryStore<B>,
        default_config: WindowConfig,
        content: ContentSource,
    ) -> Self {
        Self {
            host,
            registry: WindowRegistry::new(),
            lifecycles: Vec::new(),
            geometry,
            default_config,
            content,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn geometry_mut(&mut self) -> &mut GeometryStore<B> {
        &mut self.geometry
    }

    pub fn default_config(&self) -> &WindowConfig {
        &self.default_config
    }

    /// Every persisted window state, in stored order.
    pub fn saved_states(&mut self) -> Vec<WindowState> {
        self.geometry.all()
    }

    /// Layers defaults, saved geometry and `config`, then places the result
    /// on a visible display and applies renderer isolation defaults.
    fn resolve_config(&mut self, id: &str, config: &WindowConfig) -> WindowConfig {
        let mut resolved = self.default_config.clone();
        if let Some(saved) = self.geometry.load(id) {
            debug!("Restoring saved geometry for window '{}'", id);
            resolved = resolved.overlay(&saved.restore_overlay());
        }
        resolved = resolved.overlay(config);
        resolved.id = Some(id.to_string());

        let displays = self.host.displays();
        let primary = self.host.primary_display();
        if bounds_validator::ensure_in_bounds(&mut resolved, &displays, &primary) {
            debug!("Window '{}' recentred on the primary display", id);
        }

        let requested = resolved.web_preferences.take().unwrap_or_default();
        resolved.web_preferences = Some(WebPreferences::secure_defaults().overlay(&requested));
        resolved
    }

    /// Registry handle, unless the host has already destroyed it.
    fn live_handle(&self, id: &str) -> Option<&H::Handle> {
        self.registry.get(id).filter(|h| !h.is_destroyed())
    }

    fn lifecycle_of(&self, handle: &H::Handle) -> Option<usize> {
        self.lifecycles
            .iter()
            .position(|l| l.handle.same_window(handle))
    }

    /// True once a newer window has been created under the same id.
    fn is_superseded(&self, index: usize) -> bool {
        let id = &self.lifecycles[index].id;
        self.lifecycles[index + 1..].iter().any(|l| &l.id == id)
    }

    /// Sets the phase of the window currently registered under `id`.
    fn set_phase(&mut self, id: &str, phase: WindowPhase) {
        let index = self.registry.get(id).and_then(|h| self.lifecycle_of(h));
        if let Some(index) = index {
            self.lifecycles[index].phase = phase;
        }
    }

    /// Snapshots the window and upserts it into the geometry store.
    ///
    /// Skipped when the handle is destroyed, since a geometry event can race
    /// a close, and when a newer window owns the id.
    fn persist(&mut self, index: usize, always_on_top: Option<bool>) {
        let lifecycle = &self.lifecycles[index];
        let handle = &lifecycle.handle;
        if handle.is_destroyed() {
            debug!("Skipping geometry snapshot of destroyed window '{}'", lifecycle.id);
            return;
        }
        if self.is_superseded(index) {
            debug!("Skipping geometry snapshot of replaced window '{}'", lifecycle.id);
            return;
        }

        let bounds = handle.bounds();
        let state = WindowState {
            id: lifecycle.id.clone(),
            name: lifecycle.name.clone(),
            width: bounds.width,
            height: bounds.height,
            x: bounds.x,
            y: bounds.y,
            is_maximized: handle.is_maximized(),
            is_minimized: handle.is_minimized(),
            is_fullscreen: handle.is_full_screen(),
            always_on_top: always_on_top.unwrap_or_else(|| handle.is_always_on_top()),
        };
        self.geometry.save(state);
    }

    fn forget(&mut self, index: usize) {
        let lifecycle = self.lifecycles.remove(index);
        let registered = self
            .registry
            .get(&lifecycle.id)
            .map_or(false, |h| h.same_window(&lifecycle.handle));
        if registered {
            self.registry.remove(&lifecycle.id);
        }
        debug!("Window '{}' closed", lifecycle.id);
    }
}

impl<H: WindowHost, B: BackingStore> WindowManagerTrait for WindowManager<H, B> {
    type Handle = H::Handle;

    /// Creates, registers and wires a window, then starts loading its content.
    ///
    /// An id whose window has been asked to close may be reused at once.
    ///
    /// # Errors
    /// `WindowError::AlreadyExists` if the id is registered;
    /// `WindowError::Host` if the host cannot create the window.
    fn create_window(&mut self, config: WindowConfig) -> Result<Self::Handle, WindowError> {
        let id = config
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        if self.registry.contains(&id) {
            return Err(WindowError::AlreadyExists(id));
        }

        let resolved = self.resolve_config(&id, &config);
        let handle = self.host.create_handle(&resolved)?;
        let name = resolved
            .name
            .clone()
            .unwrap_or_else(|| UNNAMED_WINDOW.to_string());

        self.registry.put(&id, &name, handle.clone());

        for (kind, _) in LISTENERS {
            handle.listen(kind);
        }
        let phase = if resolved.show == Some(false) {
            WindowPhase::Created
        } else {
            WindowPhase::Shown
        };
        self.lifecycles.push(Lifecycle {
            id: id.clone(),
            name: name.clone(),
            handle: handle.clone(),
            phase,
            listeners: LISTENERS.to_vec(),
        });

        self.host.load_content(&handle, &self.content);
        info!("Created window '{}' ({})", id, name);
        Ok(handle)
    }

    /// Routes a host lifecycle event through the source window's listener
    /// table. Events from untracked windows or unwired kinds are ignored.
    fn dispatch(&mut self, source: &Self::Handle, event: WindowEvent) {
        let kind = event.kind();
        let index = match self.lifecycle_of(source) {
            Some(index) => index,
            None => {
                debug!("Ignoring '{}' from an untracked window", kind.as_str());
                return;
            }
        };
        let action = self.lifecycles[index].action_for(kind);

        let always_on_top = match event {
            WindowEvent::AlwaysOnTopChanged { always_on_top } => Some(always_on_top),
            _ => None,
        };

        match action {
            Some(ListenerAction::Persist) => self.persist(index, always_on_top),
            Some(ListenerAction::PersistClosing) => {
                self.lifecycles[index].phase = WindowPhase::Closing;
                self.persist(index, always_on_top);
            }
            Some(ListenerAction::Forget) => self.forget(index),
            None => {}
        }
    }

    fn get_window(&self, id: &str) -> Option<&Self::Handle> {
        self.registry.get(id)
    }

    fn get_all_windows(&self) -> Vec<&Self::Handle> {
        self.registry.all()
    }

    fn get_window_by_name(&self, name: &str) -> Option<&Self::Handle> {
        self.registry.find_by_name(name)
    }

    fn show_window(&mut self, id: &str) {
        if let Some(handle) = self.live_handle(id) {
            handle.show();
            self.set_phase(id, WindowPhase::Shown);
        }
    }

    fn hide_window(&mut self, id: &str) {
        if let Some(handle) = self.live_handle(id) {
            handle.hide();
            self.set_phase(id, WindowPhase::Hidden);
        }
    }

    /// Requests close and drops the registry entry without waiting for the
    /// host's `closed` event.
    fn close_window(&mut self, id: &str) {
        let handle = match self.registry.remove(id) {
            Some(handle) => handle,
            None => return,
        };
        let index = self.lifecycle_of(&handle);

        if handle.is_destroyed() {
            // No `closed` event will follow for a window that is already gone.
            if let Some(index) = index {
                self.lifecycles.remove(index);
            }
            return;
        }

        if let Some(index) = index {
            self.lifecycles[index].phase = WindowPhase::Closing;
        }
        handle.close();
        info!("Close requested for window '{}'", id);
    }

    fn close_all_windows(&mut self) {
        for id in self.registry.ids() {
            self.close_window(&id);
        }
    }

    fn maximize_window(&mut self, id: &str) {
        if let Some(handle) = self.live_handle(id) {
            handle.maximize();
        }
    }

    fn minimize_window(&mut self, id: &str) {
        if let Some(handle) = self.live_handle(id) {
            handle.minimize();
        }
    }

    fn restore_window(&mut self, id: &str) {
        if let Some(handle) = self.live_handle(id) {
            handle.restore();
        }
    }

    /// Maximizes a normal window or unmaximizes a maximized one.
    /// Returns the new maximized state, `None` for an unknown window.
    fn toggle_maximize(&mut self, id: &str) -> Option<bool> {
        let handle = self.live_handle(id)?;
        if handle.is_maximized() {
            handle.unmaximize();
            Some(false)
        } else {
            handle.maximize();
            Some(true)
        }
    }

    /// Flips always-on-top and returns the new value. The host reports the
    /// change back as `always-on-top-changed`, which persists it.
    fn toggle_always_on_top(&mut self, id: &str) -> Option<bool> {
        let handle = self.live_handle(id)?;
        let flag = !handle.is_always_on_top();
        handle.set_always_on_top(flag);
        Some(flag)
    }

    fn window_bounds(&self, id: &str) -> Option<Rect> {
        self.live_handle(id).map(|h| h.bounds())
    }

    fn window_summaries(&self) -> Vec<WindowSummary> {
        self.registry
            .entries()
            .iter()
            .filter(|entry| !entry.handle.is_destroyed())
            .map(|entry| {
                let handle = &entry.handle;
                WindowSummary {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    is_visible: handle.is_visible(),
                    is_focused: handle.is_focused(),
                    is_maximized: handle.is_maximized(),
                    is_minimized: handle.is_minimized(),
                    is_always_on_top: handle.is_always_on_top(),
                }
            })
            .collect()
    }

    /// Phase of the newest window created under `id`.
    fn phase(&self, id: &str) -> Option<WindowPhase> {
        self.lifecycles
            .iter()
            .rev()
            .find(|l| l.id == id)
            .map(|l| l.phase)
    }
}
