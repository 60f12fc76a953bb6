//! Single-line text input

use super::style::WidgetStyle;
use crate::input::{Key, PointerState, UiEvent};
use crate::text::{draw_text, glyph_advance, line_height};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Characters accepted by a text field unless configured otherwise
pub const DEFAULT_CHARACTERS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_-, ";

/// Characters accepted by numeric fields
pub const DIGITS: &str = "0123456789";

/// Seconds between two cursor blink toggles
pub const CURSOR_BLINK_INTERVAL: f32 = 0.25;

/// Horizontal/vertical inset of the text inside the box
const TEXT_PADDING: i32 = 5;

/// An editable single-line text buffer with a movable caret
///
/// The field gains focus when the primary pointer button is released inside
/// it and loses focus on a release outside or on Enter. Keys only edit the
/// text while the field has focus.
///
/// `column` counts characters and always satisfies
/// `0 <= column <= text.chars().count()`.
#[derive(Debug, Clone)]
pub struct TextField {
    rect: Rect,
    text: String,
    column: usize,
    active: bool,
    show_cursor: bool,
    cursor_timer: f32,
    characters: String,
    style: WidgetStyle,
}

impl TextField {
    /// Creates an empty, inactive field accepting [`DEFAULT_CHARACTERS`]
    pub fn new(rect: Rect) -> Self {
        TextField {
            rect,
            text: String::new(),
            column: 0,
            active: false,
            show_cursor: false,
            cursor_timer: 0.0,
            characters: DEFAULT_CHARACTERS.to_string(),
            style: WidgetStyle::text_field(),
        }
    }

    /// Restrict accepted input to `characters`
    pub fn with_characters(mut self, characters: &str) -> Self {
        self.characters = characters.to_string();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn column(&self) -> usize {
        self.column
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub fn show_cursor(&self) -> bool {
        self.show_cursor
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move/resize the field, keeping text, caret and focus
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Replace the whole text and put the caret at its end
    ///
    /// Bypasses the allow-list and the width limit; used for generated
    /// values such as a rolled seed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.column = self.char_count();
    }

    /// Width of one character in the field's font
    pub fn glyph_advance(&self) -> u32 {
        glyph_advance(self.style.text_scale)
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, column: usize) -> usize {
        self.text
            .char_indices()
            .nth(column)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// True while one more character still fits the box
    fn has_room(&self) -> bool {
        let advance = self.glyph_advance() as i64;
        (self.char_count() as i64) * advance < self.rect.width() as i64 - advance
    }

    pub fn handle_event(&mut self, event: &UiEvent) {
        match event {
            UiEvent::PointerReleased { x, y } => {
                if self.rect.contains_point((*x, *y)) {
                    self.active = true;
                    self.column = self.char_count();
                } else {
                    self.active = false;
                }
            }
            UiEvent::Key(key) if self.active => self.handle_key(*key),
            UiEvent::Text(text) if self.active => {
                for c in text.chars() {
                    self.insert(c);
                }
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: Key) {
        match key {
            Key::Backspace => {
                if self.column > 0 {
                    let at = self.byte_index(self.column - 1);
                    self.text.remove(at);
                    self.column -= 1;
                }
            }
            Key::Delete => {
                if self.column < self.char_count() {
                    let at = self.byte_index(self.column);
                    self.text.remove(at);
                }
            }
            Key::Home | Key::Up => self.column = 0,
            Key::End | Key::Down => self.column = self.char_count(),
            Key::Left => self.column = self.column.saturating_sub(1),
            Key::Right => self.column = (self.column + 1).min(self.char_count()),
            Key::Enter => self.active = false,
            Key::Escape => {}
        }
    }

    /// Insert `c` at the caret; disallowed or overflowing input is dropped
    fn insert(&mut self, c: char) {
        if !self.characters.contains(c) || !self.has_room() {
            return;
        }
        let at = self.byte_index(self.column);
        self.text.insert(at, c);
        self.column += 1;
    }

    /// Advance the cursor blink timer by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if self.active {
            self.cursor_timer += dt;
            if self.cursor_timer >= CURSOR_BLINK_INTERVAL {
                self.show_cursor = !self.show_cursor;
                self.cursor_timer = 0.0;
            }
        } else {
            self.show_cursor = false;
            self.cursor_timer = 0.0;
        }
    }

    /// Text as drawn: with a `|` caret at `column` while the cursor is shown
    pub fn display_text(&self) -> String {
        if self.active && self.show_cursor {
            let at = self.byte_index(self.column);
            format!("{}|{}", &self.text[..at], &self.text[at..])
        } else {
            self.text.clone()
        }
    }

    /// Advance the blink timer, then draw box, border and text
    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        pointer: &PointerState,
        dt: f32,
    ) -> Result<(), String> {
        self.tick(dt);

        self.style.draw_frame(canvas, self.rect, pointer.is_over(self.rect))?;

        let text_height = line_height(self.style.text_scale) as i32;
        let y = self.rect.y() + ((self.rect.height() as i32 - text_height) / 2).max(TEXT_PADDING);
        draw_text(
            canvas,
            &self.display_text(),
            self.rect.x() + TEXT_PADDING,
            y,
            self.style.text_color,
            self.style.text_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> TextField {
        TextField::new(Rect::new(100, 100, 200, 30))
    }

    fn focused(text: &str) -> TextField {
        let mut f = field();
        f.handle_event(&UiEvent::PointerReleased { x: 110, y: 110 });
        f.handle_event(&UiEvent::Text(text.to_string()));
        f
    }

    fn key(f: &mut TextField, key: Key) {
        f.handle_event(&UiEvent::Key(key));
    }

    #[test]
    fn test_click_inside_focuses_and_moves_caret_to_end() {
        let mut f = field();
        f.set_text("abc");
        f.handle_event(&UiEvent::Key(Key::Home));
        assert_eq!(f.column(), 3, "keys are ignored while inactive");

        f.handle_event(&UiEvent::PointerReleased { x: 150, y: 115 });
        assert!(f.is_active());
        assert_eq!(f.column(), 3);

        f.handle_event(&UiEvent::PointerReleased { x: 5, y: 5 });
        assert!(!f.is_active());
    }

    #[test]
    fn test_press_alone_does_not_focus() {
        let mut f = field();
        f.handle_event(&UiEvent::PointerPressed { x: 150, y: 115 });
        assert!(!f.is_active());
    }

    #[test]
    fn test_typing_inserts_at_caret() {
        let mut f = focused("ac");
        key(&mut f, Key::Left);
        f.handle_event(&UiEvent::Text("b".to_string()));
        assert_eq!(f.text(), "abc");
        assert_eq!(f.column(), 2);
    }

    #[test]
    fn test_inactive_field_ignores_text() {
        let mut f = field();
        f.handle_event(&UiEvent::Text("abc".to_string()));
        assert_eq!(f.text(), "");
    }

    #[test]
    fn test_disallowed_characters_are_dropped() {
        let f = focused("a!b.c");
        assert_eq!(f.text(), "abc");

        let mut seed = field().with_characters(DIGITS);
        seed.handle_event(&UiEvent::PointerReleased { x: 110, y: 110 });
        seed.handle_event(&UiEvent::Text("12ab3".to_string()));
        assert_eq!(seed.text(), "123");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut f = focused("abcd");
        key(&mut f, Key::Backspace);
        assert_eq!((f.text(), f.column()), ("abc", 3));

        key(&mut f, Key::Delete);
        assert_eq!((f.text(), f.column()), ("abc", 3), "delete at end is a no-op");

        key(&mut f, Key::Home);
        key(&mut f, Key::Backspace);
        assert_eq!((f.text(), f.column()), ("abc", 0), "backspace at 0 is a no-op");

        key(&mut f, Key::Delete);
        assert_eq!((f.text(), f.column()), ("bc", 0));
    }

    #[test]
    fn test_navigation_keys() {
        let mut f = focused("abc");
        key(&mut f, Key::Up);
        assert_eq!(f.column(), 0);
        key(&mut f, Key::Left);
        assert_eq!(f.column(), 0);
        key(&mut f, Key::Right);
        assert_eq!(f.column(), 1);
        key(&mut f, Key::Down);
        assert_eq!(f.column(), 3);
        key(&mut f, Key::Right);
        assert_eq!(f.column(), 3);
        key(&mut f, Key::Home);
        key(&mut f, Key::End);
        assert_eq!(f.column(), 3);
    }

    #[test]
    fn test_enter_defocuses_and_keeps_text() {
        let mut f = focused("name");
        key(&mut f, Key::Enter);
        assert!(!f.is_active());
        assert_eq!(f.text(), "name");
    }

    #[test]
    fn test_width_limit_drops_keystrokes() {
        // advance 12, width 200: room while len * 12 < 188, so 16 characters fit
        let mut f = focused("aaaaaaaaaaaaaaaaaaaa");
        assert_eq!(f.text().len(), 16);

        let before = f.text().to_string();
        f.handle_event(&UiEvent::Text("b".to_string()));
        assert_eq!(f.text(), before);
    }

    #[test]
    fn test_set_text_keeps_caret_in_bounds() {
        let mut f = focused("a very long name");
        f.set_text("42");
        assert_eq!(f.column(), 2);
    }

    #[test]
    fn test_cursor_blinks_every_quarter_second_while_active() {
        let mut f = focused("");
        assert!(!f.show_cursor());
        f.tick(0.1);
        assert!(!f.show_cursor());
        f.tick(0.2);
        assert!(f.show_cursor());
        assert_eq!(f.display_text(), "|");
        f.tick(0.25);
        assert!(!f.show_cursor());
    }

    #[test]
    fn test_inactive_field_hides_cursor() {
        let mut f = focused("ab");
        f.tick(0.3);
        assert!(f.show_cursor());
        key(&mut f, Key::Enter);
        f.tick(0.01);
        assert!(!f.show_cursor());
        assert_eq!(f.display_text(), "ab");
    }

    #[test]
    fn test_caret_drawn_at_column() {
        let mut f = focused("abc");
        key(&mut f, Key::Left);
        f.tick(0.25);
        assert_eq!(f.display_text(), "ab|c");
    }

    #[test]
    fn test_set_rect_keeps_state() {
        let mut f = focused("partial");
        key(&mut f, Key::Left);
        f.set_rect(Rect::new(0, 0, 300, 40));
        assert_eq!(f.text(), "partial");
        assert_eq!(f.column(), 6);
        assert!(f.is_active());
    }

    fn any_edit() -> impl Strategy<Value = UiEvent> {
        prop_oneof![
            Just(UiEvent::Key(Key::Backspace)),
            Just(UiEvent::Key(Key::Delete)),
            Just(UiEvent::Key(Key::Left)),
            Just(UiEvent::Key(Key::Right)),
            Just(UiEvent::Key(Key::Home)),
            Just(UiEvent::Key(Key::End)),
            Just(UiEvent::Key(Key::Up)),
            Just(UiEvent::Key(Key::Down)),
            "[a-z0-9!]{0,3}".prop_map(UiEvent::Text),
        ]
    }

    proptest! {
        #[test]
        fn test_caret_stays_in_bounds(events in prop::collection::vec(any_edit(), 0..100)) {
            let mut f = focused("start");
            for event in &events {
                f.handle_event(event);
                prop_assert!(f.column() <= f.text().chars().count());
            }
        }

        #[test]
        fn test_full_field_rejects_input(extra in "[a-z]{1,5}") {
            let mut f = focused("aaaaaaaaaaaaaaaa");
            let advance = f.glyph_advance() as i64;
            prop_assert!(f.text().len() as i64 * advance >= f.rect().width() as i64 - advance);

            f.handle_event(&UiEvent::Text(extra));
            prop_assert_eq!(f.text(), "aaaaaaaaaaaaaaaa");
        }
    }
}
