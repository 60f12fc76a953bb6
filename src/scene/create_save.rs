//! New save screen: a name, a seed and a Create button

use super::{draw_title, SceneContext, SceneOutcome, Viewport, SUBTITLE_SCALE};
use crate::gui::style::HEADING_COLOR;
use crate::gui::text_field::DIGITS;
use crate::gui::{ClickButton, TextField};
use crate::input::Frame;
use crate::text::draw_text_centered;
use rand::Rng;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::error;

pub const SUBTITLE: &str = "Create New Save";

/// Largest seed Roll Seed can produce
pub const MAX_SEED: u64 = 9_999_999_999;

/// A uniformly random seed as a ten digit, zero padded numeral
pub fn roll_seed<R: Rng>(rng: &mut R) -> String {
    format!("{:010}", rng.gen_range(0..=MAX_SEED))
}

pub struct CreateSaveLayout {
    pub back: Rect,
    pub create: Rect,
    pub roll_seed: Rect,
    pub name_field: Rect,
    pub seed_field: Rect,
    pub subtitle: (i32, i32),
}

/// Fields left of center, their buttons right of center
pub fn layout(viewport: &Viewport) -> CreateSaveLayout {
    let x = viewport.center_x();
    let y = viewport.center_y();

    CreateSaveLayout {
        back: Rect::new(10, 10, 60, 60),
        create: Rect::new(x, y - 30, 200, 50),
        roll_seed: Rect::new(x, y + 30, 200, 50),
        name_field: Rect::new(x - 220, y - 30, 200, 30),
        seed_field: Rect::new(x - 220, y + 30, 200, 30),
        subtitle: (x, y - 50),
    }
}

pub struct CreateSave {
    back: ClickButton,
    create: ClickButton,
    roll_seed: ClickButton,
    name_field: TextField,
    seed_field: TextField,
    subtitle: (i32, i32),
}

impl CreateSave {
    pub fn new(viewport: &Viewport) -> Self {
        let layout = layout(viewport);
        CreateSave {
            back: ClickButton::new("Back", layout.back),
            create: ClickButton::new("Create", layout.create),
            roll_seed: ClickButton::new("Roll Seed", layout.roll_seed),
            name_field: TextField::new(layout.name_field),
            seed_field: TextField::new(layout.seed_field).with_characters(DIGITS),
            subtitle: layout.subtitle,
        }
    }

    #[cfg(test)]
    pub fn name_field(&self) -> &TextField {
        &self.name_field
    }

    #[cfg(test)]
    pub fn name_text(&self) -> &str {
        self.name_field.text()
    }

    #[cfg(test)]
    pub fn seed_text(&self) -> &str {
        self.seed_field.text()
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        let layout = layout(viewport);
        self.back.set_rect(layout.back);
        self.create.set_rect(layout.create);
        self.roll_seed.set_rect(layout.roll_seed);
        self.name_field.set_rect(layout.name_field);
        self.seed_field.set_rect(layout.seed_field);
        self.subtitle = layout.subtitle;
    }

    pub fn update(&mut self, frame: &Frame, ctx: &SceneContext) -> Option<SceneOutcome> {
        for event in &frame.events {
            self.name_field.handle_event(event);
            self.seed_field.handle_event(event);
        }

        let pointer = &frame.pointer;

        if self.back.is_clicked_once(pointer) {
            return Some(SceneOutcome::Back);
        }
        if self.create.is_clicked_once(pointer) {
            let name = self.name_field.text();
            if let Err(e) = ctx.store.create(name, self.seed_field.text()) {
                error!("Failed to create save '{}': {}", name.trim(), e);
            }
            return Some(SceneOutcome::Created);
        }
        if self.roll_seed.is_clicked_once(pointer) {
            self.seed_field.set_text(roll_seed(&mut rand::thread_rng()));
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
        draw_text_centered(
            canvas,
            SUBTITLE,
            self.subtitle.0,
            self.subtitle.1,
            HEADING_COLOR,
            SUBTITLE_SCALE,
        )?;

        for button in [&self.back, &self.create, &self.roll_seed] {
            button.render(canvas, &frame.pointer)?;
        }

        self.name_field.render(canvas, &frame.pointer, frame.dt)?;
        self.seed_field.render(canvas, &frame.pointer, frame.dt)?;

        Ok(())
    }
}
