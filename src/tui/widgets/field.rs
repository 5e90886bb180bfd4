//! A single-line text field with a title, description and blinking cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};

use crate::tui::event::AppEvent;
use crate::tui::theme::{self, StyleTier};

/// Prompt drawn in front of every field value.
pub const PROMPT: &str = "➤ ";

/// Character limit used when none is given.
pub const DEFAULT_CHAR_LIMIT: usize = 60;

/// An editable text box.
///
/// Focus is controlled by the form that owns the field; an unfocused field
/// ignores edit keys but still blinks on every tick.
#[derive(Debug, Clone)]
pub struct Field {
    title: String,
    description: String,
    placeholder: String,
    value: String,
    /// Cursor position in chars, `0..=value.chars().count()`.
    cursor: usize,
    char_limit: usize,
    focused: bool,
    tier: StyleTier,
    cursor_visible: bool,
}

impl Field {
    /// Creates an empty, unfocused field.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            placeholder: String::new(),
            value: String::new(),
            cursor: 0,
            char_limit: DEFAULT_CHAR_LIMIT,
            focused: false,
            tier: StyleTier::Success,
            cursor_visible: true,
        }
    }

    /// Sets the text shown while the value is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the maximum number of characters the value may hold.
    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    /// Focuses or blurs the field and switches its style tier to match.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.tier = if focused {
            StyleTier::Emphasis
        } else {
            StyleTier::Success
        };
        if focused {
            self.cursor_visible = true;
        }
    }

    /// Applies a key or tick.
    ///
    /// Ticks toggle the cursor blink whether or not the field is focused.
    /// Keys edit the value only while focused.
    pub fn handle_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Tick => self.cursor_visible = !self.cursor_visible,
            AppEvent::Key(key) if self.focused => self.edit(key),
            AppEvent::Key(_) => {}
        }
    }

    fn edit(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch)
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => return,
        }
        self.cursor_visible = true;
    }

    /// Inserts at the cursor unless the value is already at the limit.
    fn insert_char(&mut self, ch: char) {
        if self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Number of chars in the value.
    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Returns the field title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the field description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the character limit.
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    /// Returns `true` if the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the active style tier.
    pub fn tier(&self) -> StyleTier {
        self.tier
    }

    /// Returns the cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if the cursor is in the visible half of its blink.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Builds the title, description and input lines, each followed by a blank line.
    pub fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(self.title.clone(), theme::title())),
            Line::from(""),
            Line::from(Span::styled(self.description.clone(), theme::dimmed())),
            Line::from(""),
            self.input_line(),
            Line::from(""),
        ]
    }

    fn input_line(&self) -> Line<'static> {
        let style = theme::style_for(self.tier);
        let show_cursor = self.focused && self.cursor_visible;
        let mut spans = vec![Span::styled(PROMPT, style)];

        if self.value.is_empty() {
            let mut chars = self.placeholder.chars();
            match (show_cursor, chars.next()) {
                (true, Some(first)) => {
                    spans.push(Span::styled(first.to_string(), theme::cursor()));
                    spans.push(Span::styled(chars.collect::<String>(), theme::dimmed()));
                }
                (true, None) => spans.push(Span::styled(" ", theme::cursor())),
                (false, _) => spans.push(Span::styled(self.placeholder.clone(), theme::dimmed())),
            }
            return Line::from(spans);
        }

        if !show_cursor {
            spans.push(Span::styled(self.value.clone(), style));
            return Line::from(spans);
        }

        let at = self.byte_offset(self.cursor);
        let (before, rest) = self.value.split_at(at);
        let mut rest = rest.chars();
        spans.push(Span::styled(before.to_string(), style));
        match rest.next() {
            Some(under) => {
                spans.push(Span::styled(under.to_string(), theme::cursor()));
                spans.push(Span::styled(rest.collect::<String>(), style));
            }
            None => spans.push(Span::styled(" ", theme::cursor())),
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};
    use quickcheck_macros::quickcheck;

    use super::*;

    fn key(code: KeyCode) -> AppEvent {
        key_with(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> AppEvent {
        AppEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn focused_field(limit: usize) -> Field {
        let mut field = Field::new("Keybind", "ex. meta + i")
            .with_placeholder("Placeholder")
            .with_char_limit(limit);
        field.set_focused(true);
        field
    }

    fn type_str(field: &mut Field, s: &str) {
        for ch in s.chars() {
            field.handle_event(&key(KeyCode::Char(ch)));
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    mod construction {
        use super::*;

        #[test]
        fn new_field_is_empty_and_unfocused() {
            let field = Field::new("Tag", "ex. Rofi");
            assert_eq!(field.title(), "Tag");
            assert_eq!(field.description(), "ex. Rofi");
            assert_eq!(field.value(), "");
            assert_eq!(field.placeholder(), "");
            assert_eq!(field.char_limit(), DEFAULT_CHAR_LIMIT);
            assert!(!field.is_focused());
            assert_eq!(field.tier(), StyleTier::Success);
        }

        #[test]
        fn builders_set_placeholder_and_limit() {
            let field = Field::new("Tag", "")
                .with_placeholder("Placeholder")
                .with_char_limit(20);
            assert_eq!(field.placeholder(), "Placeholder");
            assert_eq!(field.char_limit(), 20);
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn focusing_switches_to_emphasis() {
            let mut field = Field::new("Tag", "");
            field.set_focused(true);
            assert!(field.is_focused());
            assert_eq!(field.tier(), StyleTier::Emphasis);
        }

        #[test]
        fn blurring_switches_to_success() {
            let mut field = focused_field(10);
            field.set_focused(false);
            assert!(!field.is_focused());
            assert_eq!(field.tier(), StyleTier::Success);
        }

        #[test]
        fn unfocused_field_ignores_typing() {
            let mut field = Field::new("Tag", "");
            type_str(&mut field, "abc");
            assert_eq!(field.value(), "");
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn typing_appends() {
            let mut field = focused_field(60);
            type_str(&mut field, "meta+i");
            assert_eq!(field.value(), "meta+i");
            assert_eq!(field.cursor(), 6);
        }

        #[test]
        fn shifted_chars_are_typed() {
            let mut field = focused_field(60);
            field.handle_event(&key_with(KeyCode::Char('A'), KeyModifiers::SHIFT));
            assert_eq!(field.value(), "A");
        }

        #[test]
        fn control_and_alt_chars_are_ignored() {
            let mut field = focused_field(60);
            field.handle_event(&key_with(KeyCode::Char('a'), KeyModifiers::CONTROL));
            field.handle_event(&key_with(KeyCode::Char('b'), KeyModifiers::ALT));
            assert_eq!(field.value(), "");
        }

        #[test]
        fn backspace_removes_before_cursor() {
            let mut field = focused_field(60);
            type_str(&mut field, "abc");
            field.handle_event(&key(KeyCode::Backspace));
            assert_eq!(field.value(), "ab");
        }

        #[test]
        fn backspace_on_empty_is_noop() {
            let mut field = focused_field(60);
            field.handle_event(&key(KeyCode::Backspace));
            assert_eq!(field.value(), "");
            assert_eq!(field.cursor(), 0);
        }

        #[test]
        fn insert_in_middle_after_left() {
            let mut field = focused_field(60);
            type_str(&mut field, "ac");
            field.handle_event(&key(KeyCode::Left));
            type_str(&mut field, "b");
            assert_eq!(field.value(), "abc");
            assert_eq!(field.cursor(), 2);
        }

        #[test]
        fn home_end_and_delete() {
            let mut field = focused_field(60);
            type_str(&mut field, "xabc");
            field.handle_event(&key(KeyCode::Home));
            assert_eq!(field.cursor(), 0);
            field.handle_event(&key(KeyCode::Delete));
            assert_eq!(field.value(), "abc");
            field.handle_event(&key(KeyCode::End));
            assert_eq!(field.cursor(), 3);
            field.handle_event(&key(KeyCode::Delete));
            assert_eq!(field.value(), "abc");
        }

        #[test]
        fn right_stops_at_end() {
            let mut field = focused_field(60);
            type_str(&mut field, "ab");
            field.handle_event(&key(KeyCode::Right));
            assert_eq!(field.cursor(), 2);
        }

        #[test]
        fn multibyte_chars_edit_by_char() {
            let mut field = focused_field(60);
            type_str(&mut field, "é→");
            field.handle_event(&key(KeyCode::Left));
            field.handle_event(&key(KeyCode::Backspace));
            assert_eq!(field.value(), "→");
        }
    }

    mod char_limit {
        use super::*;

        #[test]
        fn typing_at_limit_leaves_value_unchanged() {
            let mut field = focused_field(3);
            type_str(&mut field, "abc");
            field.handle_event(&key(KeyCode::Char('d')));
            assert_eq!(field.value(), "abc");
        }

        #[test]
        fn limit_counts_chars_not_bytes() {
            let mut field = focused_field(3);
            type_str(&mut field, "ééé");
            assert_eq!(field.value(), "ééé");
            type_str(&mut field, "é");
            assert_eq!(field.value(), "ééé");
        }

        #[test]
        fn zero_limit_accepts_nothing() {
            let mut field = focused_field(0);
            type_str(&mut field, "a");
            assert_eq!(field.value(), "");
        }

        #[quickcheck]
        fn value_never_exceeds_limit(input: String, limit: u8) -> bool {
            let limit = usize::from(limit % 32);
            let mut field = focused_field(limit);
            input.chars().all(|ch| {
                field.handle_event(&key(KeyCode::Char(ch)));
                field.value().chars().count() <= limit
            })
        }
    }

    mod blink {
        use super::*;

        #[test]
        fn tick_toggles_cursor() {
            let mut field = focused_field(60);
            assert!(field.cursor_visible());
            field.handle_event(&AppEvent::Tick);
            assert!(!field.cursor_visible());
            field.handle_event(&AppEvent::Tick);
            assert!(field.cursor_visible());
        }

        #[test]
        fn tick_blinks_unfocused_field_too() {
            let mut field = Field::new("Tag", "");
            field.handle_event(&AppEvent::Tick);
            assert!(!field.cursor_visible());
        }

        #[test]
        fn typing_shows_cursor() {
            let mut field = focused_field(60);
            field.handle_event(&AppEvent::Tick);
            type_str(&mut field, "a");
            assert!(field.cursor_visible());
        }
    }

    mod lines {
        use super::*;

        #[test]
        fn stacks_title_description_and_input() {
            let field = Field::new("Keybind", "ex. meta + i").with_placeholder("Placeholder");
            let lines = field.lines();
            assert_eq!(lines.len(), 6);
            assert_eq!(line_text(&lines[0]), "Keybind");
            assert_eq!(line_text(&lines[2]), "ex. meta + i");
            assert_eq!(line_text(&lines[4]), "➤ Placeholder");
        }

        #[test]
        fn input_shows_value_with_trailing_cursor() {
            let mut field = focused_field(60);
            type_str(&mut field, "meta");
            assert_eq!(line_text(&field.lines()[4]), "➤ meta ");
        }

        #[test]
        fn hidden_cursor_leaves_plain_value() {
            let mut field = focused_field(60);
            type_str(&mut field, "meta");
            field.handle_event(&AppEvent::Tick);
            assert_eq!(line_text(&field.lines()[4]), "➤ meta");
        }

        #[test]
        fn prompt_uses_tier_style() {
            let mut field = focused_field(60);
            assert_eq!(
                field.lines()[4].spans[0].style,
                theme::style_for(StyleTier::Emphasis)
            );
            field.set_focused(false);
            assert_eq!(
                field.lines()[4].spans[0].style,
                theme::style_for(StyleTier::Success)
            );
        }

        #[test]
        fn cursor_inside_value_covers_char() {
            let mut field = focused_field(60);
            type_str(&mut field, "ab");
            field.handle_event(&key(KeyCode::Left));
            let line = &field.lines()[4];
            assert_eq!(line_text(line), "➤ ab");
            assert_eq!(line.spans[2].content, "b");
            assert_eq!(line.spans[2].style, theme::cursor());
        }
    }
}
