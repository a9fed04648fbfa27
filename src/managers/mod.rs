// Window state managers
// The registry tracks open windows; the window manager owns it and drives window lifecycles.

pub mod window_manager;
pub mod window_registry;
