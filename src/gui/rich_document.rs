//! Rich text document layout
//!
//! A document is an ordered list of typed blocks laid out top to bottom.
//! Every block starts [`BLOCK_GAP`] pixels below the previous one, except
//! bold runs which continue on the same line, right after the previous
//! block.
//!
//! Content is authored as `(tag, text)` pairs:
//!
//! | tag       | block            |
//! |-----------|------------------|
//! | `h1`      | heading, 2.0x    |
//! | `h2`      | heading, 1.7x    |
//! | `h3`      | heading, 1.4x    |
//! | `text`    | plain text       |
//! | `bold`    | inline bold run  |
//! | `bullet`  | bulleted item    |
//! | `divider` | centered divider |
//! | `blank`   | empty line       |

use crate::text::{draw_text, line_height, text_size};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::str::FromStr;
use thiserror::Error;

/// Vertical gap between stacked blocks
pub const BLOCK_GAP: i32 = 5;

/// Left edge of left-aligned blocks
pub const LEFT_MARGIN: i32 = 40;

/// Extra indentation of bulleted items
pub const BULLET_INDENT: i32 = 20;

/// Thickness of a divider without text
const DIVIDER_THICKNESS: u32 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("Unknown block kind '{tag}' at block {index}")]
    UnknownBlockKind { tag: String, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Text,
    Bold,
    Bullet,
    Divider,
    Blank,
}

impl BlockKind {
    /// Font size relative to the document's base scale
    pub fn scale_factor(self) -> f32 {
        match self {
            BlockKind::Heading1 => 2.0,
            BlockKind::Heading2 => 1.7,
            BlockKind::Heading3 => 1.4,
            _ => 1.0,
        }
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "h1" => Ok(BlockKind::Heading1),
            "h2" => Ok(BlockKind::Heading2),
            "h3" => Ok(BlockKind::Heading3),
            "text" => Ok(BlockKind::Text),
            "bold" => Ok(BlockKind::Bold),
            "bullet" => Ok(BlockKind::Bullet),
            "divider" => Ok(BlockKind::Divider),
            "blank" => Ok(BlockKind::Blank),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    /// Text as drawn, including decorations such as the bullet
    pub fn display_text(&self) -> String {
        match self.kind {
            BlockKind::Bullet => format!("* {}", self.text),
            BlockKind::Blank => String::new(),
            _ => self.text.clone(),
        }
    }

    fn size(&self, page_width: u32, scale: f32) -> (u32, u32) {
        match self.kind {
            BlockKind::Blank => (0, line_height(scale)),
            BlockKind::Divider if self.text.is_empty() => (page_width * 3 / 5, DIVIDER_THICKNESS),
            _ => text_size(&self.display_text(), scale),
        }
    }
}

/// Where and how large one block is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a> {
    pub block: &'a Block,
    pub rect: Rect,
    pub scale: f32,
}

#[derive(Debug, Clone)]
pub struct RichDocument {
    blocks: Vec<Block>,
    base_scale: f32,
}

impl RichDocument {
    /// Build a document from static `(tag, text)` content
    ///
    /// An unknown tag means the content itself is broken and is reported as
    /// [`DocumentError::UnknownBlockKind`].
    pub fn from_content(
        content: &[(&str, &str)],
        base_scale: f32,
    ) -> Result<Self, DocumentError> {
        let blocks = content
            .iter()
            .enumerate()
            .map(|(index, (tag, text))| {
                tag.parse::<BlockKind>()
                    .map(|kind| Block {
                        kind,
                        text: text.to_string(),
                    })
                    .map_err(|tag| DocumentError::UnknownBlockKind { tag, index })
            })
            .collect::<Result<Vec<_>, DocumentError>>()?;

        Ok(RichDocument { blocks, base_scale })
    }

    #[cfg(test)]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Lazily place every block on a page `page_width` wide, starting at `origin_y`
    pub fn layout(
        &self,
        page_width: u32,
        origin_y: i32,
    ) -> impl Iterator<Item = Placement<'_>> + '_ {
        let base_scale = self.base_scale;
        self.blocks.iter().scan(None::<Rect>, move |previous, block| {
            let placement = place(block, *previous, page_width, origin_y, base_scale);
            *previous = Some(placement.rect);
            Some(placement)
        })
    }

    /// Draw the document and return the rect of the last block, if any
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        page_width: u32,
        origin_y: i32,
        color: Color,
    ) -> Result<Option<Rect>, String> {
        let mut last = None;

        for placement in self.layout(page_width, origin_y) {
            let rect = placement.rect;
            let block = placement.block;

            match block.kind {
                BlockKind::Blank => {}
                BlockKind::Divider if block.text.is_empty() => {
                    canvas.set_draw_color(color);
                    canvas.fill_rect(rect)?;
                }
                BlockKind::Bold => {
                    // Double strike, one pixel apart
                    draw_text(canvas, &block.text, rect.x(), rect.y(), color, placement.scale)?;
                    draw_text(
                        canvas,
                        &block.text,
                        rect.x() + 1,
                        rect.y(),
                        color,
                        placement.scale,
                    )?;
                }
                _ => {
                    let text = block.display_text();
                    draw_text(canvas, &text, rect.x(), rect.y(), color, placement.scale)?;
                }
            }

            last = Some(rect);
        }

        Ok(last)
    }
}

fn place<'a>(
    block: &'a Block,
    previous: Option<Rect>,
    page_width: u32,
    origin_y: i32,
    base_scale: f32,
) -> Placement<'a> {
    let scale = base_scale * block.kind.scale_factor();
    let (width, height) = block.size(page_width, scale);
    let top = previous.map_or(origin_y, |rect| rect.bottom() + BLOCK_GAP);

    let (x, y) = match (block.kind, previous) {
        (BlockKind::Bold, Some(rect)) => (rect.right(), rect.top()),
        (BlockKind::Divider, _) => ((page_width as i32 - width as i32) / 2, top),
        (BlockKind::Bullet, _) => (LEFT_MARGIN + BULLET_INDENT, top),
        _ => (LEFT_MARGIN, top),
    };

    Placement {
        block,
        rect: Rect::new(x, y, width, height),
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(content: &[(&str, &str)]) -> RichDocument {
        RichDocument::from_content(content, 2.0).unwrap()
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let result = RichDocument::from_content(&[("h1", "Title"), ("quote", "oops")], 2.0);
        assert_eq!(
            result.unwrap_err(),
            DocumentError::UnknownBlockKind {
                tag: "quote".to_string(),
                index: 1
            }
        );
    }

    #[test]
    fn test_empty_document_places_nothing() {
        let doc = document(&[]);
        assert_eq!(doc.layout(800, 100).last(), None);
    }

    #[test]
    fn test_plain_blocks_stack_with_gap() {
        let doc = document(&[
            ("text", "one"),
            ("text", "two"),
            ("text", "three"),
            ("text", "four"),
        ]);
        let rects: Vec<Rect> = doc.layout(800, 100).map(|p| p.rect).collect();

        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0].top(), 100);
        for pair in rects.windows(2) {
            assert_eq!(pair[0].bottom() + BLOCK_GAP, pair[1].top());
            assert!(!pair[0].has_intersection(pair[1]));
        }
    }

    #[test]
    fn test_bold_run_continues_the_line() {
        let doc = document(&[("text", "Made by"), ("bold", " someone"), ("text", "next")]);
        let rects: Vec<Rect> = doc.layout(800, 0).map(|p| p.rect).collect();

        assert_eq!(rects[1].left(), rects[0].right());
        assert_eq!(rects[1].top(), rects[0].top());
        assert_eq!(rects[2].top(), rects[1].bottom() + BLOCK_GAP);
        assert_eq!(rects[2].left(), LEFT_MARGIN);
    }

    #[test]
    fn test_leading_bold_starts_at_origin() {
        let doc = document(&[("bold", "Bold")]);
        let rect = doc.layout(800, 30).next().unwrap().rect;
        assert_eq!((rect.left(), rect.top()), (LEFT_MARGIN, 30));
    }

    #[test]
    fn test_heading_scales() {
        let doc = document(&[("h1", "A"), ("h2", "A"), ("h3", "A"), ("text", "A")]);
        let heights: Vec<u32> = doc.layout(800, 0).map(|p| p.rect.height()).collect();
        assert_eq!(heights, vec![28, 24, 20, 14]);
    }

    #[test]
    fn test_divider_is_centered() {
        let doc = document(&[("divider", ""), ("divider", "* * *")]);
        let rects: Vec<Rect> = doc.layout(800, 0).map(|p| p.rect).collect();

        assert_eq!(rects[0].width(), 480);
        assert_eq!(rects[0].left(), 160);
        assert_eq!(rects[1].center().x(), 400);
    }

    #[test]
    fn test_bullets_are_indented_and_marked() {
        let doc = document(&[("bullet", "Seeds")]);
        let placement = doc.layout(800, 0).next().unwrap();
        assert_eq!(placement.rect.left(), LEFT_MARGIN + BULLET_INDENT);
        assert_eq!(placement.block.display_text(), "* Seeds");
    }

    #[test]
    fn test_blank_line_takes_a_line_of_space() {
        let doc = document(&[("text", "a"), ("blank", ""), ("text", "b")]);
        let rects: Vec<Rect> = doc.layout(800, 0).map(|p| p.rect).collect();
        assert_eq!(rects[1].height(), 14);
        assert_eq!(rects[2].top(), rects[1].bottom() + BLOCK_GAP);
    }

    #[test]
    fn test_layout_follows_origin() {
        let doc = document(&[("text", "a"), ("text", "b")]);
        let top: Vec<i32> = doc.layout(800, 100).map(|p| p.rect.top()).collect();
        let scrolled: Vec<i32> = doc.layout(800, 60).map(|p| p.rect.top()).collect();
        assert_eq!(top[0] - scrolled[0], 40);
        assert_eq!(top[1] - scrolled[1], 40);
    }
}
