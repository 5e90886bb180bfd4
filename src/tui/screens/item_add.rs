//! Add-item screen: a two-field form for a new keybind and its tag.

use crossterm::event::KeyCode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Flex, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::SubmissionRecord;
use crate::storage::{ItemSink, StorageError};
use crate::tui::event::{AppEvent, is_ctrl_c};
use crate::tui::layout::{block_size, place};
use crate::tui::theme;
use crate::tui::transition::Transition;
use crate::tui::widgets::Field;

/// Field index for the keybind.
pub const KEYBIND: usize = 0;
/// Field index for the optional tag.
pub const TAG: usize = 1;

const BANNER: [&str; 2] = ["▄▀█ █▀▄ █▀▄", "█▀█ █▄▀ █▄▀"];

const INSTRUCTIONS: &str = "Add a keybind (The tag is optional)";

/// State for the add-item screen.
///
/// Exactly one field is focused at any time; the form owns every field's
/// focus flag.
#[derive(Debug, Clone)]
pub struct ItemAddState {
    fields: Vec<Field>,
    focus: usize,
}

impl Default for ItemAddState {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemAddState {
    /// Creates the keybind/tag form with focus on the keybind.
    pub fn new() -> Self {
        Self::with_fields(vec![
            Field::new("Keybind", "ex. New Alacritty instance: meta + i")
                .with_placeholder("Placeholder")
                .with_char_limit(60),
            Field::new("Tag", "ex. Rofi or Alacritty or Kitty or Kwin")
                .with_placeholder("Placeholder")
                .with_char_limit(20),
        ])
    }

    /// Creates a form over arbitrary fields. Focus starts on the first one.
    ///
    /// On submit the first field is the keybind and the second the tag.
    pub fn with_fields(mut fields: Vec<Field>) -> Self {
        for (i, field) in fields.iter_mut().enumerate() {
            field.set_focused(i == 0);
        }
        Self { fields, focus: 0 }
    }

    /// Handles one event and reports which screen should be active next.
    ///
    /// `Enter` always submits; nothing is validated. A failed write is
    /// returned as an error instead of a transition.
    pub fn handle_event(
        &mut self,
        event: AppEvent,
        sink: &mut dyn ItemSink,
    ) -> Result<Transition, StorageError> {
        if let AppEvent::Key(key) = event {
            if is_ctrl_c(&key) {
                return Ok(Transition::Quit);
            }
            match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    self.focus_next();
                    return Ok(Transition::Stay);
                }
                KeyCode::Enter => return self.submit(sink),
                KeyCode::Esc => return Ok(Transition::GoToListScreen { rebuild: false }),
                _ => {}
            }
        }

        for field in &mut self.fields {
            field.handle_event(&event);
        }
        Ok(Transition::Stay)
    }

    /// Moves focus forward one field, wrapping at the end.
    ///
    /// Every navigation key moves forward.
    fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == self.focus);
        }
    }

    fn submit(&mut self, sink: &mut dyn ItemSink) -> Result<Transition, StorageError> {
        let record = SubmissionRecord::new(self.value(KEYBIND), self.value(TAG));
        sink.append(record)?;
        Ok(Transition::GoToListScreen { rebuild: true })
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the fields in display order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", Field::value)
    }

    /// Builds the banner, instructions and every field, top to bottom.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = BANNER
            .iter()
            .map(|row| Line::from(Span::styled(*row, theme::title())).alignment(Alignment::Center))
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(INSTRUCTIONS, theme::subtext())).alignment(Alignment::Center),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(""));
        lines.extend(self.fields.iter().flat_map(Field::lines));
        lines
    }
}

/// Renders the add-item form centered in `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_item_add(state: &ItemAddState, frame: &mut Frame, area: Rect) {
    let lines = state.lines();
    let (width, height) = block_size(&lines);
    let placed = place(area, width, height, Flex::Center, Flex::Center);
    frame.render_widget(Paragraph::new(lines), placed);
}
