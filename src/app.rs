//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components and the
//! session state but does not contain domain logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, ComparisonPanel, ElementDetailDialog, FilterPickerDialog, HelpDialog,
    HomeComponent, HomeRenderContext, QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::catalog::Catalog;
use crate::model::element::ElementId;
use crate::model::layout::GridLayout;
use crate::model::modal::{Modal, ModalStack};
use crate::model::session::SessionState;
use crate::model::ui::AppMode;
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// The 118 elements, loaded once at start-up
    pub catalog: Catalog,

    /// Filters, active element and comparison slots
    pub session: SessionState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    pub config: Config,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub comparison: ComparisonPanel,
    pub detail_dialog: ElementDetailDialog,
    pub filter_dialog: FilterPickerDialog,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App from the bundled catalog
    pub fn new(config: Config) -> Result<App> {
        let catalog = Catalog::load().context("Failed to load the element catalog")?;
        Ok(Self::with_catalog(catalog, config))
    }

    pub fn with_catalog(catalog: Catalog, config: Config) -> App {
        let layout = GridLayout::build(&catalog);
        let mode = if config.show_splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };

        App {
            mode,
            catalog,
            session: SessionState::new(),
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            config,
            splash: SplashComponent::new(),
            home: HomeComponent::new(layout),
            comparison: ComparisonPanel::new(),
            detail_dialog: ElementDetailDialog::new(),
            filter_dialog: FilterPickerDialog::new(),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog,
        }
    }

    fn symbol_of(&self, id: ElementId) -> String {
        self.catalog
            .get(id)
            .map(|e| e.symbol.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn open_detail(&mut self, id: ElementId) {
        let Some(element) = self.catalog.get(id) else {
            log::warn!("No element with atomic number {}", id);
            self.error = Some(format!("No element with atomic number {}", id));
            return;
        };

        let compared = self.session.comparison_slots().contains(&id);
        self.detail_dialog.set_element(element, compared);
        self.detail_dialog.scroll_offset = 0;

        self.home.focus(id);
        self.session = self.session.select_element(id);
        self.modals
            .remove_where(|m| matches!(m, Modal::ElementDetail { .. }));
        self.modals.push(Modal::ElementDetail { scroll_offset: 0 });
    }

    fn close_detail(&mut self) {
        self.session = self.session.close_detail();
        self.modals
            .remove_where(|m| matches!(m, Modal::ElementDetail { .. }));
    }

    /// Apply an edit to the search text; an exact symbol jumps the cursor
    fn edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        let mut search = self.session.filters().search.clone();
        edit(&mut search);
        if let Some(element) = self.catalog.find_symbol(search.trim()) {
            self.home.focus(element.id);
        }
        self.session = self.session.with_search(&search);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                self.error = None;
                self.status_message = None;

                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if self.home.is_searching() {
                    self.handle_search_key_event(key)
                } else {
                    self.home.handle_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode == AppMode::Running && self.modals.is_empty() {
            self.home.handle_mouse_event(mouse)
        } else {
            Ok(None)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            log::trace!("Action: {}", action);
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(action);
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                log::info!("Quitting");
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Grid Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::MoveCursor(direction) => self.home.move_cursor(direction),
            Action::FocusElement(id) => self.home.focus(id),

            // ─────────────────────────────────────────────────────────────────
            // Element Detail
            // ─────────────────────────────────────────────────────────────────
            Action::OpenDetail => return Ok(Some(Action::OpenDetailFor(self.home.cursor))),
            Action::OpenDetailFor(id) => {
                self.open_detail(id);
                log::debug!("Session phase: {:?}", self.session.phase());
            }
            Action::CloseDetail => {
                self.close_detail();
                log::debug!("Session phase: {:?}", self.session.phase());
            }

            // ─────────────────────────────────────────────────────────────────
            // Comparison
            // ─────────────────────────────────────────────────────────────────
            Action::AddToComparison => {
                let from_detail = self.session.active_element();
                let id = from_detail.unwrap_or(self.home.cursor);
                self.session = self.session.add_to_comparison(id);
                self.status_message = Some(match self.session.comparison_pair() {
                    Some((first, second)) => format!(
                        "Comparing {} with {}",
                        self.symbol_of(first),
                        self.symbol_of(second)
                    ),
                    None => format!("Added {} to comparison", self.symbol_of(id)),
                });
                if from_detail.is_some() {
                    return Ok(Some(Action::CloseDetail));
                }
            }
            Action::RemoveFromComparison(index) => {
                if let Some(&id) = self.session.comparison_slots().get(index) {
                    self.status_message =
                        Some(format!("Removed {} from comparison", self.symbol_of(id)));
                }
                self.session = self.session.remove_from_comparison(index);
            }
            Action::ToggleComparison => {
                self.session = self.session.toggle_comparison();
            }
            Action::CloseComparison => {
                self.session = self.session.close_comparison();
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.update(Action::OpenHelp)?;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                if matches!(self.modals.top(), Some(Modal::ElementDetail { .. })) {
                    return Ok(Some(Action::CloseDetail));
                }
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.top() == Some(&Modal::QuitConfirm) {
                    return Ok(Some(Action::ForceQuit));
                }
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {
                let index = self.filter_dialog.selected_index;
                if let Some(Modal::FilterPicker { selected_index, .. }) = self.modals.top_mut() {
                    *selected_index = index;
                }
            }
            Action::ScrollUp | Action::ScrollDown => {
                if matches!(self.modals.top(), Some(Modal::ElementDetail { .. })) {
                    self.detail_dialog.update(action)?;
                    let offset = self.detail_dialog.scroll_offset;
                    if let Some(Modal::ElementDetail { scroll_offset }) = self.modals.top_mut() {
                        *scroll_offset = offset;
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.home.enter_search_mode(),
            Action::ExitSearchMode => self.home.exit_search_mode(),
            Action::SearchInput(c) => self.edit_search(|search| search.push(c)),
            Action::SearchBackspace => self.edit_search(|search| {
                search.pop();
            }),
            Action::ClearSearch => {
                self.session = self.session.with_search("");
                self.home.exit_search_mode();
            }

            // ─────────────────────────────────────────────────────────────────
            // Filters
            // ─────────────────────────────────────────────────────────────────
            Action::OpenFilterPicker(field) => {
                let current = self.session.filters().value(field);
                self.filter_dialog.set_field(field, &current);
                self.modals.push(Modal::FilterPicker {
                    field,
                    selected_index: self.filter_dialog.selected_index,
                });
            }
            Action::SetFilter(field, value) => {
                self.session = self.session.with_filter(field, &value);
                log::info!(
                    "Active filters: {:?}",
                    self.session.filters().active_clauses()
                );
                self.modals
                    .remove_where(|m| matches!(m, Modal::FilterPicker { .. }));
                self.status_message = Some(format!(
                    "{} filter: {}",
                    field.label(),
                    field.label_for(&value)
                ));
            }
            Action::ResetFilters => {
                self.session = self.session.reset_filters();
                self.home.exit_search_mode();
                self.status_message = Some("Filters reset".to_string());
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let ctx = HomeRenderContext {
                    catalog: &self.catalog,
                    session: &self.session,
                    show_legend: self.config.show_legend,
                    dim_filtered: self.config.dim_filtered,
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                };

                draw_home_screen(frame, area, &mut self.home, &mut self.comparison, &ctx)?;

                // Bottom to top so the focused modal ends up on top
                let modals: Vec<Modal> = self.modals.iter().cloned().collect();
                for modal in &modals {
                    self.draw_modal(frame, area, modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::ElementDetail { .. } => self.detail_dialog.handle_key_event(key),
            Modal::FilterPicker { .. } => self.filter_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::ElementDetail { .. } => self.detail_dialog.draw(frame, area)?,
            Modal::FilterPicker { .. } => self.filter_dialog.draw(frame, area)?,
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::FilterField;
    use crate::model::session::SessionPhase;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let config = Config {
            show_splash: false,
            ..Config::default()
        };
        App::new(config).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through the app the way the main loop does
    fn press(app: &mut App, code: KeyCode) {
        let mut current = app.handle_key_event(key(code)).unwrap();
        while let Some(action) = current {
            current = app.update(action).unwrap();
        }
    }

    fn dispatch(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_starts_running_without_splash() {
        let app = test_app();
        assert_eq!(app.mode, AppMode::Running);
        assert_eq!(app.catalog.len(), 118);
        assert_eq!(app.session.phase(), SessionPhase::NoSelection);
    }

    #[test]
    fn test_splash_then_running() {
        let mut app = App::new(Config::default()).unwrap();
        assert_eq!(app.mode, AppMode::Splash);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, AppMode::Running);
    }

    #[test]
    fn test_enter_opens_detail_for_cursor() {
        let mut app = test_app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.active_element(), Some(app.home.cursor));
        assert_eq!(app.session.phase(), SessionPhase::ViewingDetail);
        assert!(matches!(app.modals.top(), Some(Modal::ElementDetail { .. })));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.active_element(), None);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_add_from_detail_closes_detail() {
        let mut app = test_app();
        dispatch(&mut app, Action::OpenDetailFor(26));
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(app.session.comparison_slots(), &[26]);
        assert!(app.session.is_comparison_open());
        assert_eq!(app.session.active_element(), None);
        assert!(app.modals.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Added Fe to comparison"));

        dispatch(&mut app, Action::OpenDetailFor(8));
        dispatch(&mut app, Action::AddToComparison);
        assert_eq!(app.status_message.as_deref(), Some("Comparing Fe with O"));
    }

    #[test]
    fn test_comparison_fifo_through_actions() {
        let mut app = test_app();
        for id in [1, 8, 26] {
            dispatch(&mut app, Action::OpenDetailFor(id));
            dispatch(&mut app, Action::AddToComparison);
        }
        assert_eq!(app.session.comparison_slots(), &[8, 26]);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.session.comparison_slots(), &[26]);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session.comparison_slots(), &[26]);
    }

    #[test]
    fn test_unknown_element_sets_error() {
        let mut app = test_app();
        dispatch(&mut app, Action::OpenDetailFor(200));
        assert!(app.error.is_some());
        assert!(app.modals.is_empty());
        assert_eq!(app.session.active_element(), None);
    }

    #[test]
    fn test_search_typing_and_clear() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.home.is_searching());

        for c in "irx".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.filters().search, "ir");

        press(&mut app, KeyCode::Enter);
        assert!(!app.home.is_searching());
        assert_eq!(app.session.filters().search, "ir");
        assert_eq!(app.home.cursor, 77);

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Esc);
        assert!(app.session.filters().search.is_empty());
    }

    #[test]
    fn test_filter_picker_applies_value() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('s'));
        assert!(matches!(
            app.modals.top(),
            Some(Modal::FilterPicker {
                field: FilterField::State,
                selected_index: 0
            })
        ));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert!(matches!(
            app.modals.top(),
            Some(Modal::FilterPicker {
                selected_index: 2,
                ..
            })
        ));

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.session.filters().value(FilterField::State), "liquid");

        press(&mut app, KeyCode::Char('r'));
        assert!(app.session.filters().is_identity());
    }

    #[test]
    fn test_quit_needs_confirmation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = test_app();
        dispatch(&mut app, Action::OpenHelp);
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_draw_with_overlays() {
        let mut app = test_app();
        dispatch(&mut app, Action::AddToComparison);
        dispatch(&mut app, Action::OpenDetailFor(79));
        dispatch(&mut app, Action::OpenHelp);

        let mut terminal = Terminal::new(TestBackend::new(200, 50)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Element Comparison"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let mut app = test_app();
        dispatch(&mut app, Action::OpenDetailFor(1));
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
    }
}
