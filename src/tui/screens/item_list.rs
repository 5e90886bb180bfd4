//! Item list screen: table of every saved keybind.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::Item;
use crate::storage::ItemStore;
use crate::tui::event::{AppEvent, is_ctrl_c};
use crate::tui::theme;
use crate::tui::transition::Transition;

/// State for the item list screen.
#[derive(Debug, Clone)]
pub struct ItemListState {
    /// Items copied from the store on the last load.
    items: Vec<Item>,
    /// Index of the highlighted item, or `None` if the list is empty.
    selected: Option<usize>,
    /// Message from the last failed rebuild.
    error: Option<String>,
}

impl Default for ItemListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemListState {
    /// Creates an empty state. Call [`load`](Self::load) to populate from the store.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            error: None,
        }
    }

    /// Copies the store's items, resetting the selection and error.
    pub fn load(&mut self, store: &ItemStore) {
        self.items = store.items().to_vec();
        self.selected = if self.items.is_empty() { None } else { Some(0) };
        self.error = None;
    }

    /// Handles one event. Ticks are ignored.
    pub fn handle_event(&mut self, event: AppEvent) -> Transition {
        let AppEvent::Key(key) = event else {
            return Transition::Stay;
        };
        if is_ctrl_c(&key) {
            return Transition::Quit;
        }
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Transition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                Transition::Stay
            }
            KeyCode::Char('a') => Transition::GoToAddScreen,
            KeyCode::Char('q') | KeyCode::Esc => Transition::Quit,
            _ => Transition::Stay,
        }
    }

    /// Returns the loaded items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets an error message to display on this screen.
    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    /// Moves the selection up by one (no wrap).
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the selection down by one (no wrap).
    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.items.len() => Some(i + 1),
            other => other,
        };
    }
}

/// Renders the item list screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_item_list(state: &ItemListState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Keybinds ")
        .borders(Borders::ALL)
        .border_style(theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [table_area, error_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    if state.items().is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from("No keybinds saved yet."),
            Line::from("Press 'a' to add one."),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            table_area,
        );
    } else {
        let header = Row::new(vec!["Keybind", "Tag"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = state
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if state.selected() == Some(i) {
                    theme::selected()
                } else {
                    Style::default()
                };
                Row::new(vec![item.title.clone(), item.tag.clone()]).style(style)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Min(0), Constraint::Length(22)]).header(header);
        frame.render_widget(table, table_area);
    }

    if let Some(err) = state.error() {
        frame.render_widget(Paragraph::new(err).style(theme::error()), error_area);
    }

    let footer = Paragraph::new("↑↓: navigate  a: add  q: quit").style(theme::dimmed());
    frame.render_widget(footer, footer_area);
}
