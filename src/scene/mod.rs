//! Scene navigation
//!
//! Each screen of the menu shell is a scene. A scene owns its widgets, is
//! fed one [`Frame`] of input per tick and eventually returns a
//! [`SceneOutcome`]. The pure [`transition`] function maps the current
//! [`SceneState`] and that outcome to the next state, and [`SceneGraph`] is
//! the single scheduler that drives it all.
//!
//! # States
//!
//! ```text
//! MainMenu --Load--> LoadSave --Selected--> Play <--Escape--> Paused
//!    |  \--New--> CreateSave --Created--> LoadSave            |
//!    \--About--> About --Back--> (where it came from) <--About-+
//! ```
//!
//! Every scene recomputes its rectangles through a pure `layout(viewport)`
//! function, both when it is entered and when the window is resized.

pub mod about;
pub mod create_save;
pub mod load_save;
pub mod main_menu;
pub mod play;

use crate::gui::style::HEADING_COLOR;
use crate::input::{Frame, UiEvent};
use crate::save::{SaveRecord, SaveStore};
use crate::text::draw_text_centered;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::{debug, info, warn};

pub use about::About;
pub use create_save::CreateSave;
pub use load_save::LoadSave;
pub use main_menu::MainMenu;
pub use play::Play;

/// Title shown on every menu screen
pub const TITLE: &str = "The Lab";

/// Vertical center of the title
pub const TITLE_Y: i32 = 150;

pub const TITLE_SCALE: f32 = 10.0;

pub const SUBTITLE_SCALE: f32 = 2.0;

/// Dimensions of the render target
///
/// Owned by the [`SceneGraph`], updated in place on resize and handed to
/// scenes by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Viewport { width, height }
    }

    pub fn center_x(&self) -> i32 {
        self.width as i32 / 2
    }

    pub fn center_y(&self) -> i32 {
        self.height as i32 / 2
    }
}

/// Shared resources a scene may use while updating
pub struct SceneContext<'a> {
    pub store: &'a SaveStore,
    pub viewport: &'a Viewport,
}

/// A save being played
#[derive(Debug, Clone, PartialEq)]
pub struct PlaySession {
    pub record: SaveRecord,
    pub file_name: String,
    pub paused: bool,
}

impl PlaySession {
    pub fn new(record: SaveRecord, file_name: impl Into<String>) -> Self {
        PlaySession {
            record,
            file_name: file_name.into(),
            paused: false,
        }
    }
}

/// Where the About screen returns to
#[derive(Debug, Clone, PartialEq)]
pub enum AboutOrigin {
    MainMenu,
    Paused(PlaySession),
}

/// Navigation state
#[derive(Debug, Clone, PartialEq)]
pub enum SceneState {
    MainMenu,
    CreateSave,
    LoadSave,
    About { return_to: AboutOrigin },
    Play(PlaySession),
}

impl SceneState {
    pub fn name(&self) -> &'static str {
        match self {
            SceneState::MainMenu => "Main Menu",
            SceneState::CreateSave => "Create Save",
            SceneState::LoadSave => "Load Menu",
            SceneState::About { .. } => "About",
            SceneState::Play(session) if session.paused => "Paused",
            SceneState::Play(_) => "Play",
        }
    }
}

/// What a scene asks the scheduler to do next
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOutcome {
    // Main menu buttons
    Load,
    New,
    About,
    Quit,
    /// Back button of CreateSave, LoadSave and About
    Back,
    /// A save was written by CreateSave
    Created,
    /// A save was picked and loaded in LoadSave
    Selected {
        record: SaveRecord,
        file_name: String,
    },
    /// About clicked on the pause overlay
    AboutFromPause(PlaySession),
    /// Quit clicked on the pause overlay
    LeavePlay,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Next {
    Enter(SceneState),
    Exit,
}

/// The transition function of the navigation state machine
///
/// Outcomes a state cannot produce leave the state unchanged.
pub fn transition(state: &SceneState, outcome: SceneOutcome) -> Next {
    use SceneOutcome as O;
    use SceneState as S;

    let next = match (state, outcome) {
        (S::MainMenu, O::Load) => S::LoadSave,
        (S::MainMenu, O::New) => S::CreateSave,
        (S::MainMenu, O::About) => S::About {
            return_to: AboutOrigin::MainMenu,
        },
        (S::MainMenu, O::Quit) => return Next::Exit,

        (S::CreateSave, O::Back) => S::MainMenu,
        (S::CreateSave, O::Created) => S::LoadSave,

        (S::LoadSave, O::Back) => S::MainMenu,
        (S::LoadSave, O::Selected { record, file_name }) => {
            S::Play(PlaySession::new(record, file_name))
        }

        (S::Play(_), O::AboutFromPause(session)) => S::About {
            return_to: AboutOrigin::Paused(session),
        },
        (S::Play(_), O::LeavePlay) => S::MainMenu,

        (S::About { return_to }, O::Back) => match return_to {
            AboutOrigin::MainMenu => S::MainMenu,
            AboutOrigin::Paused(session) => S::Play(PlaySession {
                paused: true,
                ..session.clone()
            }),
        },

        (state, outcome) => {
            warn!("Ignoring {:?} in {}", outcome, state.name());
            state.clone()
        }
    };

    Next::Enter(next)
}

/// The scene currently receiving frames
pub enum ActiveScene {
    MainMenu(MainMenu),
    CreateSave(CreateSave),
    LoadSave(LoadSave),
    About(About),
    Play(Play),
}

impl ActiveScene {
    /// Build the widgets of the scene for `state`
    pub fn enter(state: &SceneState, ctx: &SceneContext) -> Result<Self, String> {
        let scene = match state {
            SceneState::MainMenu => ActiveScene::MainMenu(MainMenu::new(ctx.viewport)),
            SceneState::CreateSave => ActiveScene::CreateSave(CreateSave::new(ctx.viewport)),
            SceneState::LoadSave => {
                let names = ctx.store.list().unwrap_or_else(|e| {
                    warn!("Could not list saves: {}", e);
                    Vec::new()
                });
                ActiveScene::LoadSave(LoadSave::new(ctx.viewport, names))
            }
            SceneState::About { .. } => {
                ActiveScene::About(About::new(ctx.viewport).map_err(|e| e.to_string())?)
            }
            SceneState::Play(session) => {
                ActiveScene::Play(Play::new(ctx.viewport, session.clone()))
            }
        };
        Ok(scene)
    }

    pub fn update(&mut self, frame: &Frame, ctx: &SceneContext) -> Option<SceneOutcome> {
        match self {
            ActiveScene::MainMenu(scene) => scene.update(frame),
            ActiveScene::CreateSave(scene) => scene.update(frame, ctx),
            ActiveScene::LoadSave(scene) => scene.update(frame, ctx),
            ActiveScene::About(scene) => scene.update(frame),
            ActiveScene::Play(scene) => scene.update(frame, ctx),
        }
    }

    /// Reposition every widget for a new viewport, keeping widget state
    pub fn resize(&mut self, viewport: &Viewport) {
        match self {
            ActiveScene::MainMenu(scene) => scene.resize(viewport),
            ActiveScene::CreateSave(scene) => scene.resize(viewport),
            ActiveScene::LoadSave(scene) => scene.resize(viewport),
            ActiveScene::About(scene) => scene.resize(viewport),
            ActiveScene::Play(scene) => scene.resize(viewport),
        }
    }

    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        frame: &Frame,
        viewport: &Viewport,
    ) -> Result<(), String> {
        match self {
            ActiveScene::MainMenu(scene) => scene.render(canvas, frame, viewport),
            ActiveScene::CreateSave(scene) => scene.render(canvas, frame, viewport),
            ActiveScene::LoadSave(scene) => scene.render(canvas, frame, viewport),
            ActiveScene::About(scene) => scene.render(canvas, frame, viewport),
            ActiveScene::Play(scene) => scene.render(canvas, frame, viewport),
        }
    }
}

/// Scheduler of the navigation state machine
///
/// Call [`SceneGraph::step`] once per frame, then [`SceneGraph::render`].
pub struct SceneGraph {
    state: SceneState,
    scene: ActiveScene,
    viewport: Viewport,
    store: SaveStore,
}

impl SceneGraph {
    /// Starts at the main menu
    pub fn new(store: SaveStore, viewport: Viewport) -> Self {
        SceneGraph {
            state: SceneState::MainMenu,
            scene: ActiveScene::MainMenu(MainMenu::new(&viewport)),
            viewport,
            store,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    #[cfg(test)]
    pub fn scene(&self) -> &ActiveScene {
        &self.scene
    }

    #[cfg(test)]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[cfg(test)]
    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    /// Process one frame of input
    ///
    /// Returns `Ok(false)` once the program should end, either because the
    /// window was closed or Quit was chosen on the main menu.
    pub fn step(&mut self, frame: &Frame) -> Result<bool, String> {
        for event in &frame.events {
            match event {
                UiEvent::Quit => {
                    info!("Window closed");
                    return Ok(false);
                }
                UiEvent::Resized { width, height } => {
                    let viewport = Viewport::new(*width, *height);
                    if viewport != self.viewport {
                        debug!("Resized to {}x{}", width, height);
                        self.viewport = viewport;
                    }
                    self.scene.resize(&self.viewport);
                }
                _ => {}
            }
        }

        let ctx = SceneContext {
            store: &self.store,
            viewport: &self.viewport,
        };

        let outcome = self.scene.update(frame, &ctx);

        // Pausing happens inside the Play scene; mirror it into the state
        if let (SceneState::Play(session), ActiveScene::Play(play)) =
            (&mut self.state, &self.scene)
        {
            session.paused = play.session().paused;
        }

        let Some(outcome) = outcome else {
            return Ok(true);
        };

        match transition(&self.state, outcome) {
            Next::Exit => {
                info!("Quit from {}", self.state.name());
                Ok(false)
            }
            Next::Enter(state) => {
                debug!("{} -> {}", self.state.name(), state.name());
                self.scene = ActiveScene::enter(&state, &ctx)?;
                self.state = state;
                Ok(true)
            }
        }
    }

    pub fn render(&mut self, canvas: &mut Canvas<Window>, frame: &Frame) -> Result<(), String> {
        self.scene.render(canvas, frame, &self.viewport)
    }
}

/// Draw the big centered title
pub fn draw_title(canvas: &mut Canvas<Window>, viewport: &Viewport) -> Result<(), String> {
    draw_text_centered(
        canvas,
        TITLE,
        viewport.center_x(),
        TITLE_Y,
        HEADING_COLOR,
        TITLE_SCALE,
    )
}
