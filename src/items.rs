use crate::canvas::Canvas;
use crate::geom::{Rect, Vec2};

// Items live in level space; `offset` maps them onto the screen.
pub trait LevelItem {
    fn bounds(&self, offset: Vec2) -> Rect;

    fn render(&self, canvas: &mut dyn Canvas, offset: Vec2);

    fn finishes_level(&self) -> bool {
        false
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: String,
}

impl Block {
    pub const COLOR: &'static str = "#5b6ee1";

    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            color: Self::COLOR.to_string(),
        }
    }
}

impl LevelItem for Block {
    fn bounds(&self, offset: Vec2) -> Rect {
        Rect::from_pos_size(self.pos - offset, self.size)
    }

    fn render(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        canvas.fill_rect(self.pos - offset, self.size, &self.color);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Exit {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Exit {
    const COLOR: &'static str = "#37946e";

    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }
}

impl LevelItem for Exit {
    fn bounds(&self, offset: Vec2) -> Rect {
        Rect::from_pos_size(self.pos - offset, self.size)
    }

    fn render(&self, canvas: &mut dyn Canvas, offset: Vec2) {
        canvas.fill_rect(self.pos - offset, self.size, Self::COLOR);
    }

    fn finishes_level(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};

    #[test]
    fn block_scrolls_with_offset() {
        let block = Block::new(Vec2::new(100.0, 64.0), Vec2::new(32.0, 32.0));
        let bounds = block.bounds(Vec2::new(40.0, 0.0));
        assert_eq!(bounds.min, Vec2::new(60.0, 64.0));
        assert_eq!(bounds.max, Vec2::new(92.0, 96.0));
        assert_eq!(bounds.size(), block.size);

        let mut canvas = RecordingCanvas::new();
        block.render(&mut canvas, Vec2::new(40.0, 0.0));
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::Rect {
                pos: Vec2::new(60.0, 64.0),
                size: Vec2::new(32.0, 32.0),
                color: Block::COLOR.to_string(),
            }]
        );
    }

    #[test]
    fn only_exits_finish() {
        let size = Vec2::new(32.0, 32.0);
        assert!(!Block::new(Vec2::ZERO, size).finishes_level());
        assert!(Exit::new(Vec2::ZERO, size).finishes_level());
    }
}
