//! Screen-Space GUI System
//!
//! Widgets drawn at fixed screen positions with SDL2 primitives and the
//! bitmap font. Widgets never decide navigation themselves: a scene polls
//! them once per frame and turns what they report into a scene outcome.
//!
//! # Available Components
//!
//! - [`ClickButton`] - Labelled button with a one-shot click latch
//! - [`TextField`] - Single line text input with caret and allow-list
//! - [`RichDocument`] - Block based rich text layout
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::gui::ClickButton;
//!
//! let mut back = ClickButton::new("Back", Rect::new(10, 10, 60, 60));
//!
//! // Once per frame
//! if back.is_clicked_once(&frame.pointer) {
//!     return Some(SceneOutcome::Back);
//! }
//! back.render(&mut canvas, &frame.pointer)?;
//! ```

pub mod click_button;
pub mod rich_document;
pub mod style;
pub mod text_field;

pub use click_button::ClickButton;
pub use rich_document::{DocumentError, RichDocument};
pub use text_field::TextField;
