//! Shared widget styling and drawing helpers

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Clear color of every menu screen
pub const BACKGROUND_COLOR: Color = Color::RGB(200, 200, 200);

/// Color of titles and subtitles
pub const HEADING_COLOR: Color = Color::RGB(50, 50, 50);

/// Configuration for widget appearance
#[derive(Debug, Clone)]
pub struct WidgetStyle {
    /// Fill color
    pub base_color: Color,

    /// Fill color while the pointer is over the widget
    pub hover_color: Color,

    /// Border color
    pub border_color: Color,

    /// Border thickness (draws double border if > 1)
    pub border_thickness: u32,

    /// Label/content text color
    pub text_color: Color,

    /// Bitmap font scale for label/content text
    pub text_scale: f32,
}

impl Default for WidgetStyle {
    fn default() -> Self {
        WidgetStyle {
            base_color: Color::RGB(100, 100, 100),
            hover_color: Color::RGB(150, 150, 150),
            border_color: Color::RGB(0, 0, 0),
            border_thickness: 2,
            text_color: Color::RGB(255, 255, 255),
            text_scale: 2.0,
        }
    }
}

impl WidgetStyle {
    /// Style used by text fields: dark text on the default fill
    pub fn text_field() -> Self {
        WidgetStyle {
            text_color: Color::RGB(0, 0, 0),
            ..Default::default()
        }
    }

    /// Draw the hover/base fill and the border of a widget
    pub fn draw_frame(
        &self,
        canvas: &mut Canvas<Window>,
        rect: Rect,
        hovered: bool,
    ) -> Result<(), String> {
        canvas.set_draw_color(if hovered { self.hover_color } else { self.base_color });
        canvas.fill_rect(rect)?;

        canvas.set_draw_color(self.border_color);
        canvas.draw_rect(rect)?;
        if self.border_thickness > 1 && rect.width() > 2 && rect.height() > 2 {
            canvas.draw_rect(Rect::new(
                rect.x() + 1,
                rect.y() + 1,
                rect.width() - 2,
                rect.height() - 2,
            ))?;
        }

        Ok(())
    }
}

/// Darken the whole screen with a translucent black layer
pub fn draw_overlay(canvas: &mut Canvas<Window>, alpha: u8) -> Result<(), String> {
    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(0, 0, 0, alpha));
    canvas.fill_rect(None)?;
    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}
