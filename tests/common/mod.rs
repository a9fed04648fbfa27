//! Recording test double for the host windowing capability.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use winstate::host::{WindowHandle, WindowHost};
use winstate::types::errors::HostError;
use winstate::types::event::WindowEventKind;
use winstate::types::geometry::Rect;
use winstate::types::window::{ContentSource, WindowConfig};

/// Mutable state behind a mock window.
#[derive(Debug, Default)]
pub struct MockWindowState {
    pub config: WindowConfig,
    pub bounds: Rect,
    pub visible: bool,
    pub focused: bool,
    pub maximized: bool,
    pub minimized: bool,
    pub full_screen: bool,
    pub always_on_top: bool,
    pub destroyed: bool,
    pub listening: Vec<WindowEventKind>,
    pub calls: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct MockWindow {
    pub state: Rc<RefCell<MockWindowState>>,
}

impl MockWindow {
    fn from_config(config: &WindowConfig) -> Self {
        let bounds = Rect::new(
            config.x.unwrap_or(0),
            config.y.unwrap_or(0),
            config.width.unwrap_or(0),
            config.height.unwrap_or(0),
        );
        let state = MockWindowState {
            config: config.clone(),
            bounds,
            visible: config.show != Some(false),
            always_on_top: config.always_on_top.unwrap_or(false),
            ..MockWindowState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Simulates the user dragging or resizing the window.
    pub fn set_bounds(&self, bounds: Rect) {
        self.state.borrow_mut().bounds = bounds;
    }

    pub fn destroy(&self) {
        self.state.borrow_mut().destroyed = true;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub fn config(&self) -> WindowConfig {
        self.state.borrow().config.clone()
    }

    fn record(&self, call: &'static str) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl WindowHandle for MockWindow {
    fn bounds(&self) -> Rect {
        self.state.borrow().bounds
    }

    fn show(&self) {
        self.record("show");
        self.state.borrow_mut().visible = true;
    }

    fn hide(&self) {
        self.record("hide");
        self.state.borrow_mut().visible = false;
    }

    fn close(&self) {
        self.record("close");
    }

    fn maximize(&self) {
        self.record("maximize");
        self.state.borrow_mut().maximized = true;
    }

    fn unmaximize(&self) {
        self.record("unmaximize");
        self.state.borrow_mut().maximized = false;
    }

    fn minimize(&self) {
        self.record("minimize");
        self.state.borrow_mut().minimized = true;
    }

    fn restore(&self) {
        self.record("restore");
        let mut state = self.state.borrow_mut();
        state.minimized = false;
        state.maximized = false;
    }

    fn set_always_on_top(&self, flag: bool) {
        self.record("set_always_on_top");
        self.state.borrow_mut().always_on_top = flag;
    }

    fn is_maximized(&self) -> bool {
        self.state.borrow().maximized
    }

    fn is_minimized(&self) -> bool {
        self.state.borrow().minimized
    }

    fn is_full_screen(&self) -> bool {
        self.state.borrow().full_screen
    }

    fn is_always_on_top(&self) -> bool {
        self.state.borrow().always_on_top
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn is_focused(&self) -> bool {
        self.state.borrow().focused
    }

    fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }

    fn same_window(&self, other: &MockWindow) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn listen(&self, kind: WindowEventKind) {
        self.state.borrow_mut().listening.push(kind);
    }
}

#[derive(Debug, Default)]
pub struct MockHostState {
    pub displays: Vec<Rect>,
    pub primary: Rect,
    pub created: Vec<MockWindow>,
    pub loads: Vec<ContentSource>,
    pub fail_next_create: bool,
}

/// Host double. Clones share state so tests can inspect it after handing a
/// clone to the manager.
#[derive(Debug, Clone)]
pub struct MockHost {
    pub state: Rc<RefCell<MockHostState>>,
}

impl MockHost {
    /// One 1920x1080 display at the origin.
    pub fn single_display() -> Self {
        Self::with_displays(vec![Rect::new(0, 0, 1920, 1080)])
    }

    /// The first display is the primary one.
    pub fn with_displays(displays: Vec<Rect>) -> Self {
        let primary = displays.first().copied().unwrap_or_default();
        Self {
            state: Rc::new(RefCell::new(MockHostState {
                displays,
                primary,
                ..MockHostState::default()
            })),
        }
    }

    pub fn created(&self) -> Vec<MockWindow> {
        self.state.borrow().created.clone()
    }

    pub fn last_created(&self) -> MockWindow {
        self.state.borrow().created.last().cloned().expect("no window created")
    }

    pub fn loads(&self) -> Vec<ContentSource> {
        self.state.borrow().loads.clone()
    }

    pub fn fail_next_create(&self) {
        self.state.borrow_mut().fail_next_create = true;
    }
}

impl WindowHost for MockHost {
    type Handle = MockWindow;

    fn create_handle(&mut self, config: &WindowConfig) -> Result<MockWindow, HostError> {
        let mut state = self.state.borrow_mut();
        if state.fail_next_create {
            state.fail_next_create = false;
            return Err(HostError::CreateFailed("display server unavailable".to_string()));
        }
        let window = MockWindow::from_config(config);
        state.created.push(window.clone());
        Ok(window)
    }

    fn load_content(&mut self, _handle: &MockWindow, source: &ContentSource) {
        self.state.borrow_mut().loads.push(source.clone());
    }

    fn displays(&self) -> Vec<Rect> {
        self.state.borrow().displays.clone()
    }

    fn primary_display(&self) -> Rect {
        self.state.borrow().primary
    }
}
