//! Play screen and its pause overlay

use super::{PlaySession, SceneContext, SceneOutcome, Viewport};
use crate::gui::style::{draw_overlay, HEADING_COLOR};
use crate::gui::ClickButton;
use crate::input::{Frame, Key, UiEvent};
use crate::text::{draw_text, draw_text_centered};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::{error, info};

/// Alpha of the black layer drawn over the paused game
pub const OVERLAY_ALPHA: u8 = 127;

const READOUT_COLOR: Color = Color::RGB(0, 0, 0);
const READOUT_SCALE: f32 = 2.0;
const PAUSED_SCALE: f32 = 4.0;

pub struct PlayLayout {
    pub resume: Rect,
    pub save: Rect,
    pub about: Rect,
    pub quit: Rect,
    pub paused_label: (i32, i32),
}

pub fn layout(viewport: &Viewport) -> PlayLayout {
    let x = viewport.center_x() - 100;
    let y = viewport.center_y();

    PlayLayout {
        resume: Rect::new(x, y - 50, 200, 50),
        save: Rect::new(x, y + 10, 200, 50),
        about: Rect::new(x, y + 70, 200, 50),
        quit: Rect::new(x, y + 130, 200, 50),
        paused_label: (viewport.center_x(), viewport.height as i32 / 3),
    }
}

pub struct Play {
    session: PlaySession,
    resume: ClickButton,
    save: ClickButton,
    about: ClickButton,
    quit: ClickButton,
    paused_label: (i32, i32),
}

impl Play {
    pub fn new(viewport: &Viewport, session: PlaySession) -> Self {
        let layout = layout(viewport);
        Play {
            session,
            resume: ClickButton::new("Resume", layout.resume),
            save: ClickButton::new("Save", layout.save),
            about: ClickButton::new("About", layout.about),
            quit: ClickButton::new("Quit", layout.quit),
            paused_label: layout.paused_label,
        }
    }

    pub fn session(&self) -> &PlaySession {
        &self.session
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        let layout = layout(viewport);
        self.resume.set_rect(layout.resume);
        self.save.set_rect(layout.save);
        self.about.set_rect(layout.about);
        self.quit.set_rect(layout.quit);
        self.paused_label = layout.paused_label;
    }

    /// Show or hide the overlay
    ///
    /// Hidden buttons are not polled, so their latches are cleared here; a
    /// press armed before hiding must not fire once the overlay is back.
    fn set_paused(&mut self, paused: bool) {
        self.session.paused = paused;
        for button in [&mut self.resume, &mut self.save, &mut self.about, &mut self.quit] {
            button.reset();
        }
        info!("{}", if paused { "Paused" } else { "Resumed" });
    }

    pub fn update(&mut self, frame: &Frame, ctx: &SceneContext) -> Option<SceneOutcome> {
        for event in &frame.events {
            if let UiEvent::Key(Key::Escape) = event {
                self.set_paused(!self.session.paused);
            }
        }

        // The overlay buttons only exist while paused
        if !self.session.paused {
            return None;
        }

        let pointer = &frame.pointer;

        if self.resume.is_clicked_once(pointer) {
            self.set_paused(false);
            return None;
        }
        if self.save.is_clicked_once(pointer) {
            if let Err(e) = ctx.store.write(&self.session.file_name, &self.session.record) {
                error!("Failed to save {}: {}", self.session.file_name, e);
            }
            return None;
        }
        if self.about.is_clicked_once(pointer) {
            return Some(SceneOutcome::AboutFromPause(self.session.clone()));
        }
        if self.quit.is_clicked_once(pointer) {
            return Some(SceneOutcome::LeavePlay);
        }
        None
    }

    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        frame: &Frame,
        _viewport: &Viewport,
    ) -> Result<(), String> {
        draw_text(
            canvas,
            &format!("FPS: {:.2}", frame.fps),
            10,
            10,
            READOUT_COLOR,
            READOUT_SCALE,
        )?;
        draw_text(
            canvas,
            &format!("Seed: {}", self.session.record.seed),
            10,
            30,
            READOUT_COLOR,
            READOUT_SCALE,
        )?;

        if self.session.paused {
            draw_overlay(canvas, OVERLAY_ALPHA)?;
            draw_text_centered(
                canvas,
                "Paused",
                self.paused_label.0,
                self.paused_label.1,
                HEADING_COLOR,
                PAUSED_SCALE,
            )?;

            for button in [&self.resume, &self.save, &self.about, &self.quit] {
                button.render(canvas, &frame.pointer)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::SaveRecord;
    use crate::scene::testing::*;

    const VIEWPORT: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    fn session() -> PlaySession {
        PlaySession::new(SaveRecord::new("4242"), "alpha.tlab")
    }

    #[test]
    fn test_layout_matches_main_menu_column() {
        let layout = layout(&VIEWPORT);
        assert_eq!(layout.resume, Rect::new(300, 250, 200, 50));
        assert_eq!(layout.quit, Rect::new(300, 430, 200, 50));
        assert_eq!(layout.paused_label, (400, 200));
    }

    #[test]
    fn test_escape_toggles_pause() {
        let (_dir, store) = temp_store();
        let ctx = SceneContext {
            store: &store,
            viewport: &VIEWPORT,
        };
        let mut play = Play::new(&VIEWPORT, session());

        assert_eq!(play.update(&key(Key::Escape), &ctx), None);
        assert!(play.session().paused);
        assert_eq!(play.update(&key(Key::Escape), &ctx), None);
        assert!(!play.session().paused);
    }

    #[test]
    fn test_hidden_overlay_drops_armed_press() {
        let (_dir, store) = temp_store();
        store.create("alpha", "1").unwrap();
        let ctx = SceneContext {
            store: &store,
            viewport: &VIEWPORT,
        };
        let mut play = Play::new(&VIEWPORT, session());
        let layout = layout(&VIEWPORT);

        for target in [layout.quit, layout.save] {
            play.update(&key(Key::Escape), &ctx);
            assert_eq!(play.update(&press(target), &ctx), None);

            // Escape while still holding the button hides the overlay
            let held_escape = Frame {
                events: vec![UiEvent::Key(Key::Escape)],
                ..press(target)
            };
            assert_eq!(play.update(&held_escape, &ctx), None);
            assert!(!play.session().paused);

            assert_eq!(play.update(&release(target), &ctx), None);
            for _ in 0..5 {
                assert_eq!(play.update(&idle(), &ctx), None);
            }

            assert_eq!(play.update(&key(Key::Escape), &ctx), None);
            assert!(play.session().paused);
            assert_eq!(play.update(&idle(), &ctx), None);

            play.update(&key(Key::Escape), &ctx);
        }

        // Save never fired, so the file still holds its own seed
        assert_eq!(store.load("alpha.tlab").unwrap().seed, "1");
    }

    #[test]
    fn test_resume_unpauses() {
        let (_dir, store) = temp_store();
        let ctx = SceneContext {
            store: &store,
            viewport: &VIEWPORT,
        };
        let mut play = Play::new(&VIEWPORT, session());
        play.update(&key(Key::Escape), &ctx);

        let resume = layout(&VIEWPORT).resume;
        play.update(&press(resume), &ctx);
        assert_eq!(play.update(&release(resume), &ctx), None);
        assert!(!play.session().paused);
    }

    #[test]
    fn test_about_carries_paused_session() {
        let (_dir, store) = temp_store();
        let ctx = SceneContext {
            store: &store,
            viewport: &VIEWPORT,
        };
        let mut play = Play::new(&VIEWPORT, session());
        play.update(&key(Key::Escape), &ctx);

        let about = layout(&VIEWPORT).about;
        play.update(&press(about), &ctx);
        let Some(SceneOutcome::AboutFromPause(carried)) = play.update(&release(about), &ctx) else {
            panic!("expected AboutFromPause");
        };
        assert!(carried.paused);
        assert_eq!(carried.file_name, "alpha.tlab");
    }

    #[test]
    fn test_save_writes_record() {
        let (_dir, store) = temp_store();
        let ctx = SceneContext {
            store: &store,
            viewport: &VIEWPORT,
        };
        let mut play = Play::new(&VIEWPORT, session());
        play.update(&key(Key::Escape), &ctx);

        let save = layout(&VIEWPORT).save;
        play.update(&press(save), &ctx);
        assert_eq!(play.update(&release(save), &ctx), None);
        assert_eq!(store.load("alpha.tlab").unwrap(), SaveRecord::new("4242"));
    }
}
