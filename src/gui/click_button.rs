//! Edge-triggered click button

use super::style::WidgetStyle;
use crate::input::PointerState;
use crate::text::draw_text_centered;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A rectangular button that fires once per press-release cycle
///
/// The button arms while the primary pointer button is held down inside its
/// rect, and fires on the first frame the button is no longer held while
/// armed. Releasing outside the rect still counts as a click.
///
/// # Example
///
/// ```rust
/// let mut quit = ClickButton::new("Quit", Rect::new(300, 430, 200, 50));
///
/// // Once per frame
/// quit.render(&mut canvas, &frame.pointer)?;
/// if quit.is_clicked_once(&frame.pointer) {
///     return Some(SceneOutcome::Quit);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClickButton {
    label: String,
    rect: Rect,
    pressed: bool,
    style: WidgetStyle,
}

impl ClickButton {
    /// Creates a new button with default styling
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        ClickButton {
            label: label.into(),
            rect,
            pressed: false,
            style: WidgetStyle::default(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Move/resize the button, keeping the press latch
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// True while armed by a press that has not been released yet
    #[cfg(test)]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Disarm the latch; for buttons that stop being polled while hidden
    pub fn reset(&mut self) {
        self.pressed = false;
    }

    /// Edge detector: true exactly on the release that ends an armed press
    ///
    /// Must be called once per frame per button; the latch advances on
    /// every call.
    pub fn is_clicked_once(&mut self, pointer: &PointerState) -> bool {
        if pointer.primary_down && pointer.is_over(self.rect) {
            self.pressed = true;
        } else if self.pressed && !pointer.primary_down {
            self.pressed = false;
            return true;
        }
        false
    }

    /// Draw fill, border and the centered label
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        pointer: &PointerState,
    ) -> Result<(), String> {
        self.style.draw_frame(canvas, self.rect, pointer.is_over(self.rect))?;

        let center = self.rect.center();
        draw_text_centered(
            canvas,
            &self.label,
            center.x(),
            center.y(),
            self.style.text_color,
            self.style.text_scale,
        )
    }
}
