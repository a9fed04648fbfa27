//! Host windowing capability.
//!
//! The shell never talks to a native toolkit directly. A host (wry/tao,
//! a platform layer, or a test double) implements these traits and forwards
//! lifecycle events back through
//! [`WindowManagerTrait::dispatch`](crate::managers::window_manager::WindowManagerTrait::dispatch).

use crate::types::errors::HostError;
use crate::types::event::WindowEventKind;
use crate::types::geometry::Rect;
use crate::types::window::{ContentSource, WindowConfig};

/// Reference to a host-managed native window.
///
/// Handles are cheap to clone and all share the same underlying window.
/// A handle may outlive its window; [`is_destroyed`](Self::is_destroyed)
/// reports that, and callers must not read geometry from a destroyed handle.
pub trait WindowHandle: Clone {
    fn bounds(&self) -> Rect;

    fn show(&self);
    fn hide(&self);
    /// Requests close. The host later emits `close` then `closed`.
    fn close(&self);
    fn maximize(&self);
    fn unmaximize(&self);
    fn minimize(&self);
    fn restore(&self);
    /// The host must report the change back as `always-on-top-changed`.
    fn set_always_on_top(&self, flag: bool);

    fn is_maximized(&self) -> bool;
    fn is_minimized(&self) -> bool;
    fn is_full_screen(&self) -> bool;
    fn is_always_on_top(&self) -> bool;
    fn is_visible(&self) -> bool;
    fn is_focused(&self) -> bool;
    fn is_destroyed(&self) -> bool;

    /// Whether both handles refer to the same native window.
    fn same_window(&self, other: &Self) -> bool;

    /// Asks the host to forward events of `kind` for this window, passing
    /// this handle as the event source.
    fn listen(&self, kind: WindowEventKind);
}

/// Factory and display information provided by the host process.
///
/// Hosts forward every wired event for a window, including the
/// `always-on-top-changed` that follows `set_always_on_top`.
pub trait WindowHost {
    type Handle: WindowHandle;

    /// Creates a native window from a fully resolved config.
    fn create_handle(&mut self, config: &WindowConfig) -> Result<Self::Handle, HostError>;

    /// Starts loading renderer content. Not awaited.
    fn load_content(&mut self, handle: &Self::Handle, source: &ContentSource);

    /// Every attached display, in global desktop coordinates.
    fn displays(&self) -> Vec<Rect>;

    fn primary_display(&self) -> Rect;
}
