//! Title screen

use super::{draw_title, SceneOutcome, Viewport};
use crate::gui::ClickButton;
use crate::input::Frame;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct MainMenuLayout {
    pub load: Rect,
    pub new: Rect,
    pub about: Rect,
    pub quit: Rect,
}

/// A centered column of four 200x50 buttons, 60 pixels apart
pub fn layout(viewport: &Viewport) -> MainMenuLayout {
    let x = viewport.center_x() - 100;
    let y = viewport.center_y();

    MainMenuLayout {
        load: Rect::new(x, y - 50, 200, 50),
        new: Rect::new(x, y + 10, 200, 50),
        about: Rect::new(x, y + 70, 200, 50),
        quit: Rect::new(x, y + 130, 200, 50),
    }
}

pub struct MainMenu {
    load: ClickButton,
    new: ClickButton,
    about: ClickButton,
    quit: ClickButton,
}

impl MainMenu {
    pub fn new(viewport: &Viewport) -> Self {
        let layout = layout(viewport);
        MainMenu {
            load: ClickButton::new("Load", layout.load),
            new: ClickButton::new("New", layout.new),
            about: ClickButton::new("About", layout.about),
            quit: ClickButton::new("Quit", layout.quit),
        }
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        let layout = layout(viewport);
        self.load.set_rect(layout.load);
        self.new.set_rect(layout.new);
        self.about.set_rect(layout.about);
        self.quit.set_rect(layout.quit);
    }

    pub fn update(&mut self, frame: &Frame) -> Option<SceneOutcome> {
        let pointer = &frame.pointer;

        if self.load.is_clicked_once(pointer) {
            return Some(SceneOutcome::Load);
        }
        if self.new.is_clicked_once(pointer) {
            return Some(SceneOutcome::New);
        }
        if self.about.is_clicked_once(pointer) {
            return Some(SceneOutcome::About);
        }
        if self.quit.is_clicked_once(pointer) {
            return Some(SceneOutcome::Quit);
        }
        None
    }

    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        frame: &Frame,
        viewport: &Viewport,
    ) -> Result<(), String> {
        draw_title(canvas, viewport)?;

        for button in [&self.load, &self.new, &self.about, &self.quit] {
            button.render(canvas, &frame.pointer)?;
        }

        Ok(())
    }
}
