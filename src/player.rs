use crate::canvas::Canvas;
use crate::geom::{Rect, Vec2};

pub const STARTING_LIVES: u32 = 3;
const PLAYER_COLOR: &str = "#f5c542";

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub score: u32,
    pub lives: u32,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            score: 0,
            lives: STARTING_LIVES,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.pos, self.size, PLAYER_COLOR);
    }
}
