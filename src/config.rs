use crate::geom::Vec2;

pub const BLOCK_SIZE: u32 = 32;
pub const GRID_SIZE: (u32, u32) = (25, 15);
pub const WINDOW_SIZE: (f64, f64) = (
    (GRID_SIZE.0 * BLOCK_SIZE) as f64,
    (GRID_SIZE.1 * BLOCK_SIZE) as f64,
);
pub const LEVEL_USE_BACKGROUND: bool = true;
pub const LEVEL_BACKGROUND_IMAGE: &str = "assets/backgrounds/level.png";
pub const DEFAULT_SCROLL: Vec2 = Vec2::new(0.05, 0.0);
pub const HUD_FONT_SIZE: f64 = 20.0;
pub const HUD_FONT_FACE: &str = "monospace";
pub const HUD_FONT_COLOR: &str = "white";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub block_size: u32,
    pub grid_size: (u32, u32),
    pub use_background: bool,
    pub background_image: String,
    pub default_scroll: Vec2,
    pub start_level: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            grid_size: GRID_SIZE,
            use_background: LEVEL_USE_BACKGROUND,
            background_image: LEVEL_BACKGROUND_IMAGE.to_string(),
            default_scroll: DEFAULT_SCROLL,
            start_level: 0,
        }
    }
}

impl Config {
    // e.g. `?nobg=1&level=2`; unknown keys and bad values are ignored.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let search = search.strip_prefix('?').unwrap_or(search);

        for pair in search.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "nobg" if value == "1" => config.use_background = false,
                "bg" if value == "1" => config.use_background = true,
                "level" => {
                    if let Ok(level) = value.parse::<usize>() {
                        config.start_level = level;
                    }
                }
                "scroll" => match value.parse::<f64>() {
                    Ok(x) if x.is_finite() && x >= 0.0 => config.default_scroll.x = x,
                    _ => log::warn!("ignoring scroll override {:?}", value),
                },
                _ => {}
            }
        }

        config
    }

    pub fn block_size_px(&self) -> f64 {
        self.block_size as f64
    }

    pub fn window_size(&self) -> Vec2 {
        Vec2::new(
            (self.grid_size.0 * self.block_size) as f64,
            (self.grid_size.1 * self.block_size) as f64,
        )
    }

    // Grid row 0 is the bottom row.
    pub fn grid_to_pixels(&self, gx: i32, gy: i32) -> Vec2 {
        let block = self.block_size_px();
        Vec2::new(
            gx as f64 * block,
            (self.grid_size.1 as i32 - gy - 1) as f64 * block,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.window_size(), Vec2::new(WINDOW_SIZE.0, WINDOW_SIZE.1));
        assert!(config.use_background);
        assert_eq!(config.default_scroll, DEFAULT_SCROLL);
    }

    #[test]
    fn query_overrides() {
        let config = Config::from_query("?nobg=1&level=2&scroll=0.25&unknown=x");
        assert!(!config.use_background);
        assert_eq!(config.start_level, 2);
        assert_eq!(config.default_scroll, Vec2::new(0.25, 0.0));
    }

    #[test]
    fn malformed_query_values_keep_defaults() {
        let config = Config::from_query("level=two&scroll=-1&nobg=0");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn grid_row_zero_is_bottom() {
        let config = Config::default();
        assert_eq!(config.grid_to_pixels(0, 0), Vec2::new(0.0, 14.0 * 32.0));
        assert_eq!(config.grid_to_pixels(3, 14), Vec2::new(96.0, 0.0));
    }
}
