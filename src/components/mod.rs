//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod comparison;
pub mod detail_dialog;
pub mod filter_dialog;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod legend;
pub mod quit_dialog;
pub mod splash;

pub use comparison::ComparisonPanel;
pub use detail_dialog::ElementDetailDialog;
pub use filter_dialog::FilterPickerDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
