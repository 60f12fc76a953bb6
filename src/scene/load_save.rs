//! Save selection screen: one button per save file

use super::{draw_title, SceneContext, SceneOutcome, Viewport, SUBTITLE_SCALE};
use crate::gui::style::HEADING_COLOR;
use crate::gui::ClickButton;
use crate::input::Frame;
use crate::text::draw_text_centered;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const SUBTITLE: &str = "Select Save";

/// Vertical distance between two save buttons
pub const SAVE_SPACING: i32 = 40;

pub struct LoadSaveLayout {
    pub back: Rect,
    pub saves: Vec<Rect>,
    pub subtitle: (i32, i32),
}

/// Save buttons stack downwards from the vertical center
pub fn layout(viewport: &Viewport, save_count: usize) -> LoadSaveLayout {
    let x = viewport.center_x() - 100;
    let y = viewport.center_y();

    LoadSaveLayout {
        back: Rect::new(10, 10, 60, 60),
        saves: (0..save_count)
            .map(|i| Rect::new(x, y + i as i32 * SAVE_SPACING, 200, 30))
            .collect(),
        subtitle: (viewport.center_x(), y - 50),
    }
}

pub struct LoadSave {
    back: ClickButton,
    saves: Vec<ClickButton>,
    subtitle: (i32, i32),
}

impl LoadSave {
    /// `names` are save names as listed by the store
    pub fn new(viewport: &Viewport, names: Vec<String>) -> Self {
        let layout = layout(viewport, names.len());
        LoadSave {
            back: ClickButton::new("Back", layout.back),
            saves: names
                .into_iter()
                .zip(layout.saves)
                .map(|(name, rect)| ClickButton::new(name, rect))
                .collect(),
            subtitle: layout.subtitle,
        }
    }

    #[cfg(test)]
    pub fn save_names(&self) -> Vec<&str> {
        self.saves.iter().map(|button| button.label()).collect()
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        let layout = layout(viewport, self.saves.len());
        self.back.set_rect(layout.back);
        for (button, rect) in self.saves.iter_mut().zip(layout.saves) {
            button.set_rect(rect);
        }
        self.subtitle = layout.subtitle;
    }

    pub fn update(&mut self, frame: &Frame, ctx: &SceneContext) -> Option<SceneOutcome> {
        let pointer = &frame.pointer;

        for button in &mut self.saves {
            if button.is_clicked_once(pointer) {
                let file_name = ctx.store.file_name(button.label());
                // A save that can no longer be read keeps us on this screen
                return ctx
                    .store
                    .try_load(&file_name)
                    .map(|record| SceneOutcome::Selected { record, file_name });
            }
        }

        if self.back.is_clicked_once(pointer) {
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
        draw_title(canvas, viewport)?;
        draw_text_centered(
            canvas,
            SUBTITLE,
            self.subtitle.0,
            self.subtitle.1,
            HEADING_COLOR,
            SUBTITLE_SCALE,
        )?;

        for button in &self.saves {
            button.render(canvas, &frame.pointer)?;
        }
        self.back.render(canvas, &frame.pointer)
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

    #[test]
    fn test_layout_stacks_saves() {
        let layout = layout(&VIEWPORT, 3);
        assert_eq!(layout.saves[0], Rect::new(300, 300, 200, 30));
        assert_eq!(layout.saves[2], Rect::new(300, 380, 200, 30));
    }

    #[test]
    fn test_selecting_loads_the_record() {
        let (_dir, store) = temp_store();
        store.create("alpha", "1").unwrap();
        store.create("beta", "2").unwrap();
        let ctx = SceneContext {
            store: &store,
            viewport: &VIEWPORT,
        };

        let mut scene = LoadSave::new(&VIEWPORT, store.list().unwrap());
        assert_eq!(scene.save_names(), vec!["alpha", "beta"]);

        let rect = layout(&VIEWPORT, 2).saves[1];
        assert_eq!(scene.update(&press(rect), &ctx), None);
        assert_eq!(
            scene.update(&release(rect), &ctx),
            Some(SceneOutcome::Selected {
                record: SaveRecord::new("2"),
                file_name: "beta.tlab".to_string(),
            })
        );
    }

    #[test]
    fn test_back_returns_no_selection() {
        let (_dir, store) = temp_store();
        let ctx = SceneContext {
            store: &store,
            viewport: &VIEWPORT,
        };
        let mut scene = LoadSave::new(&VIEWPORT, Vec::new());

        let back = layout(&VIEWPORT, 0).back;
        scene.update(&press(back), &ctx);
        assert_eq!(scene.update(&release(back), &ctx), Some(SceneOutcome::Back));
    }

    #[test]
    fn test_resize_keeps_saves() {
        let mut scene = LoadSave::new(&VIEWPORT, vec!["a".to_string(), "b".to_string()]);
        scene.resize(&Viewport::new(400, 300));
        assert_eq!(scene.save_names(), vec!["a", "b"]);
    }
}
