use std::time::Instant;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use crate::storage::ItemStore;

use super::error::AppError;
use super::event::{AppEvent, BLINK_INTERVAL};
use super::screens::{ItemAddState, ItemListState, draw_item_add, draw_item_list};
use super::transition::Transition;

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Browse saved keybinds.
    ItemList,
    /// Add a new keybind.
    ItemAdd,
}

/// Top-level application state.
///
/// Owns the item store and hands it to whichever screen needs it.
pub struct App {
    screen: Screen,
    store: ItemStore,
    item_list: ItemListState,
    item_add: ItemAddState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::ItemList`] screen.
    pub fn new(store: ItemStore) -> Self {
        let mut item_list = ItemListState::new();
        item_list.load(&store);
        Self {
            screen: Screen::ItemList,
            store,
            item_list,
            item_add: ItemAddState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → wait for a key or the next tick → dispatch.
    ///
    /// Returns an error if an item could not be saved; the caller is
    /// expected to exit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut next_tick = Instant::now() + BLINK_INTERVAL;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key)?;
            }

            if Instant::now() >= next_tick {
                self.handle_event(AppEvent::Tick)?;
                next_tick = Instant::now() + BLINK_INTERVAL;
            }
        }
        Ok(())
    }

    /// Renders the active screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::ItemList => draw_item_list(&self.item_list, frame, area),
            Screen::ItemAdd => draw_item_add(&self.item_add, frame, area),
        }
    }

    /// Handles a key event. Only presses are dispatched.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), AppError> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        self.handle_event(AppEvent::Key(key))
    }

    /// Delivers an event to the active screen and applies its transition.
    pub fn handle_event(&mut self, event: AppEvent) -> Result<(), AppError> {
        let transition = match self.screen {
            Screen::ItemList => self.item_list.handle_event(event),
            Screen::ItemAdd => self.item_add.handle_event(event, &mut self.store)?,
        };
        self.apply(transition);
        Ok(())
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::GoToListScreen { rebuild } => self.show_item_list(rebuild),
            Transition::GoToAddScreen => {
                self.item_add = ItemAddState::new();
                self.screen = Screen::ItemAdd;
            }
            Transition::Quit => self.should_quit = true,
        }
    }

    /// Switches to the list, first re-reading it from disk if `rebuild` is set.
    ///
    /// A failed reload keeps the store's in-memory items and shows the
    /// error on the list screen.
    fn show_item_list(&mut self, rebuild: bool) {
        if rebuild {
            let reload = self.store.reload();
            self.item_list.load(&self.store);
            if let Err(e) = reload {
                tracing::warn!(error = %e, path = %self.store.path().display(), "failed to rebuild item list");
                self.item_list
                    .set_error(format!("Could not reload keybinds: {e}"));
            }
        }
        self.screen = Screen::ItemList;
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the [`ItemStore`].
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Returns the list screen state.
    pub fn item_list(&self) -> &ItemListState {
        &self.item_list
    }

    /// Returns the add screen state.
    pub fn item_add(&self) -> &ItemAddState {
        &self.item_add
    }
}
