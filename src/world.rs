use crate::assets::Assets;
use crate::canvas::Canvas;
use crate::config::{self, Config};
use crate::error::Result;
use crate::geom::Vec2;
use crate::items::{Block, Exit};
use crate::level::{Level, LevelTransition};
use crate::level_data::{ItemDef, LevelSequenceDef};
use crate::player::Player;

#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    pub size: Vec2,
    pub hidpi_factor: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub size: f64,
    pub face: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudStyle {
    pub font: Font,
    pub color: String,
}

impl Default for HudStyle {
    fn default() -> Self {
        Self {
            font: Font {
                size: config::HUD_FONT_SIZE,
                face: config::HUD_FONT_FACE.to_string(),
            },
            color: config::HUD_FONT_COLOR.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorldContext {
    pub player: Player,
    pub window: Window,
    pub hud: HudStyle,
    // None once the sequence is done
    pub level: Option<usize>,
    pub last_active_level: Option<usize>,
}

impl WorldContext {
    pub fn new(config: &Config) -> Self {
        let block = config.block_size_px();
        Self {
            player: Player::new(Vec2::ZERO, Vec2::new(block, block)),
            window: Window {
                size: config.window_size(),
                hidpi_factor: 1.0,
            },
            hud: HudStyle::default(),
            level: None,
            last_active_level: None,
        }
    }
}

pub struct World {
    ctx: WorldContext,
    levels: Vec<Level>,
}

impl World {
    pub fn new(ctx: WorldContext) -> Self {
        Self {
            ctx,
            levels: Vec::new(),
        }
    }

    pub fn from_sequence(
        config: &Config,
        ctx: WorldContext,
        seq: &LevelSequenceDef,
        assets: &Assets,
    ) -> Result<Self> {
        let mut world = Self::new(ctx);
        let block = config.block_size_px();

        for (index, def) in seq.levels.iter().enumerate() {
            let mut level = Level::new(
                &mut world.ctx,
                index,
                def.start,
                def.scroll.map(Vec2::from),
                config,
                assets,
            )?;
            for item in &def.items {
                match *item {
                    ItemDef::Block { x, y, w, h } => {
                        // Blocks grow upward from their grid cell.
                        let top = config.grid_to_pixels(x, y + h as i32 - 1);
                        level.add_item(Box::new(Block::new(
                            top,
                            Vec2::new(w as f64 * block, h as f64 * block),
                        )));
                    }
                    ItemDef::Exit { x, y } => {
                        level.add_item(Box::new(Exit::new(
                            config.grid_to_pixels(x, y),
                            Vec2::new(block, block),
                        )));
                    }
                }
            }
            world.push_level(level);
        }

        let start = if config.start_level < world.levels.len() {
            config.start_level
        } else {
            log::warn!(
                "start level {} out of range ({} levels); starting at 0",
                config.start_level,
                world.levels.len()
            );
            0
        };
        world.start(start);
        Ok(world)
    }

    pub fn push_level(&mut self, level: Level) {
        self.levels.push(level);
    }

    pub fn start(&mut self, index: usize) {
        match self.levels.get(index) {
            Some(level) => {
                self.ctx.player.pos = level.start_pos();
                self.ctx.level = Some(index);
            }
            None => self.ctx.level = None,
        }
    }

    pub fn context(&self) -> &WorldContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut WorldContext {
        &mut self.ctx
    }

    pub fn player(&self) -> &Player {
        &self.ctx.player
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_mut(&mut self, index: usize) -> Option<&mut Level> {
        self.levels.get_mut(index)
    }

    pub fn active_level(&self) -> Option<&Level> {
        self.ctx.level.and_then(|i| self.levels.get(i))
    }

    pub fn tick(&mut self, canvas: &mut dyn Canvas) -> bool {
        let Some(index) = self.ctx.level else {
            return false;
        };
        let Some(level) = self.levels.get_mut(index) else {
            self.ctx.level = None;
            return false;
        };

        canvas.clear();
        // Exit hits are tested where the frame was drawn, before render scrolls.
        let drawn_offset = level.offset();
        match level.render(&mut self.ctx, canvas) {
            LevelTransition::Stay => {
                let player = self.ctx.player.bounds();
                let reached_exit = level
                    .items()
                    .iter()
                    .any(|item| {
                        item.finishes_level() && item.bounds(drawn_offset).intersects(&player)
                    });
                if reached_exit {
                    level.finish();
                }
            }
            LevelTransition::Advance { next } => self.advance(next),
        }

        self.ctx.level.is_some()
    }

    fn advance(&mut self, next: usize) {
        match self.levels.get(next) {
            Some(target) => {
                self.ctx.player.pos = target.start_pos();
                self.ctx.level = Some(next);
                log::info!("advancing to level {}", next);
            }
            None => {
                self.ctx.level = None;
                log::info!(
                    "level sequence complete, final score {}",
                    self.ctx.player.score
                );
            }
        }
    }
}
