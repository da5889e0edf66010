use crate::assets::{Assets, Image};
use crate::canvas::Canvas;
use crate::config::Config;
use crate::error::{LevelError, Result};
use crate::geom::Vec2;
use crate::items::LevelItem;
use crate::world::WorldContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelTransition {
    Stay,
    Advance { next: usize },
}

pub struct Level {
    index: usize,
    start_pos: Vec2,
    offset: Vec2,
    scroll: Vec2,
    items: Vec<Box<dyn LevelItem>>,
    finished: bool,
    counter: u32,
    block_size: u32,
    use_background: bool,
    window_size: Vec2,
    background_offset: f64,
    background: Image,
    bg_size: Vec2,
    bg_center: Vec2,
}

impl Level {
    pub fn new(
        world: &mut WorldContext,
        index: usize,
        start_grid: (i32, i32),
        scroll: Option<Vec2>,
        config: &Config,
        assets: &Assets,
    ) -> Result<Self> {
        if config.block_size == 0 {
            return Err(LevelError::ZeroBlockSize);
        }
        let background = assets.image(&config.background_image)?.clone();
        let window_size = world.window.size;
        let bg_size = background.size();

        world.last_active_level = Some(index);
        log::debug!(
            "level {} constructed (start grid {:?}, background {})",
            index,
            start_grid,
            background.name()
        );

        Ok(Self {
            index,
            start_pos: config.grid_to_pixels(start_grid.0, start_grid.1),
            offset: Vec2::ZERO,
            scroll: scroll.unwrap_or(config.default_scroll),
            items: Vec::new(),
            finished: false,
            counter: 0,
            block_size: config.block_size,
            use_background: config.use_background,
            window_size,
            background_offset: window_size.x / 2.0,
            background,
            bg_size,
            bg_center: bg_size.half(),
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start_pos(&self) -> Vec2 {
        self.start_pos
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn items(&self) -> &[Box<dyn LevelItem>] {
        &self.items
    }

    pub fn add_item(&mut self, item: Box<dyn LevelItem>) {
        self.items.push(item);
    }

    pub fn finish(&mut self) {
        if !self.finished {
            log::info!("level {} finished", self.index);
        }
        self.finished = true;
    }

    pub fn get_score(&self, world: &WorldContext) -> u32 {
        world.player.score
    }

    pub fn render(&mut self, world: &mut WorldContext, canvas: &mut dyn Canvas) -> LevelTransition {
        if self.use_background {
            self.render_background(canvas);
        }

        self.counter += 1;
        if self.counter % self.block_size == 0 {
            self.counter = 0;
            world.player.score += 1;
        }

        self.render_hud(world, canvas);

        let width = self.window_size.x;
        for item in &self.items {
            if item.bounds(self.offset).overlaps_x(width) {
                item.render(canvas, self.offset);
            }
        }

        world.player.render(canvas);

        self.offset += self.scroll * self.block_size as f64;

        if self.finished {
            LevelTransition::Advance {
                next: self.index + 1,
            }
        } else {
            LevelTransition::Stay
        }
    }

    // Two window-wide copies side by side hide the wrap seam.
    fn render_background(&self, canvas: &mut dyn Canvas) {
        let first = Vec2::new(
            -self.offset.x.rem_euclid(self.window_size.x) + self.background_offset,
            self.window_size.y / 2.0,
        );
        let second = Vec2::new(first.x + self.window_size.x, first.y);

        for dest in [first, second] {
            canvas.draw_image(
                &self.background,
                self.bg_center,
                self.bg_size,
                dest,
                self.window_size,
            );
        }
    }

    fn render_hud(&self, world: &WorldContext, canvas: &mut dyn Canvas) {
        let dpi = world.window.hidpi_factor;
        let font = &world.hud.font;
        let lines = [
            (format!("SCORE // {}", world.player.score), 20.0),
            (format!("LIVES // {}", world.player.lives), 40.0),
        ];

        for (text, y) in lines {
            canvas.draw_text(
                &text,
                Vec2::new(10.0 * dpi, y * dpi),
                font.size,
                &world.hud.color,
                &font.face,
            );
        }
    }
}
