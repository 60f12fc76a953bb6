//! Scrollable about page

use super::{SceneOutcome, Viewport};
use crate::gui::style::HEADING_COLOR;
use crate::gui::{ClickButton, DocumentError, RichDocument};
use crate::input::{Frame, UiEvent};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Pixels scrolled per wheel notch
pub const SCROLL_STEP: i32 = 5;

/// Top of the document when not scrolled, clear of the Back button
pub const DOCUMENT_TOP: i32 = 90;

const BASE_SCALE: f32 = 2.0;

pub const ABOUT_CONTENT: &[(&str, &str)] = &[
    ("h1", "The Lab"),
    ("divider", ""),
    ("text", "A small sandbox for trying out game ideas."),
    ("blank", ""),
    ("h2", "Getting started"),
    ("bullet", "New creates a save from a name and a seed"),
    ("bullet", "Roll Seed picks a random ten digit seed"),
    ("bullet", "Load lists every save in the save folder"),
    ("blank", ""),
    ("h2", "While playing"),
    ("text", "Press "),
    ("bold", "Escape"),
    ("bold", " to pause."),
    ("bullet", "Resume returns to the game"),
    ("bullet", "Save writes the current save file"),
    ("bullet", "Quit returns to the main menu without saving"),
    ("blank", ""),
    ("h3", "Saves"),
    ("text", "Saves are plain JSON files and can be edited by hand."),
    ("text", "Fields the game does not know are kept on save."),
    ("blank", ""),
    ("divider", "* * *"),
];

pub struct AboutLayout {
    pub back: Rect,
}

pub fn layout(_viewport: &Viewport) -> AboutLayout {
    AboutLayout {
        back: Rect::new(10, 10, 60, 60),
    }
}

pub struct About {
    document: RichDocument,
    back: ClickButton,
    scroll_offset: i32,
}

impl About {
    pub fn new(viewport: &Viewport) -> Result<Self, DocumentError> {
        Ok(About {
            document: RichDocument::from_content(ABOUT_CONTENT, BASE_SCALE)?,
            back: ClickButton::new("Back", layout(viewport).back),
            scroll_offset: 0,
        })
    }

    #[cfg(test)]
    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Positive notches scroll up, towards the top of the page
    pub fn scroll(&mut self, notches: i32) {
        self.scroll_offset = (self.scroll_offset + notches * SCROLL_STEP).min(0);
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        self.back.set_rect(layout(viewport).back);
    }

    pub fn update(&mut self, frame: &Frame) -> Option<SceneOutcome> {
        for event in &frame.events {
            if let UiEvent::Wheel(notches) = event {
                self.scroll(*notches);
            }
        }

        if self.back.is_clicked_once(&frame.pointer) {
            return Some(SceneOutcome::Back);
        }
        None
    }

    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        frame: &Frame,
        viewport: &Viewport,
    ) -> Result<(), String> {
        self.document.render(
            canvas,
            viewport.width,
            DOCUMENT_TOP + self.scroll_offset,
            HEADING_COLOR,
        )?;

        // Drawn last so scrolled text passes under it
        self.back.render(canvas, &frame.pointer)
    }
}
