//! UI state - presentation state separate from domain data

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Where keyboard input on the main screen goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Grid,
    Search,
}
