use serde::Deserialize;

use crate::error::{LevelError, Result};

pub const EMBEDDED_LEVELS_RON: &str = include_str!("../assets/levels/levels.ron");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LevelSequenceDef {
    pub version: u32,
    pub levels: Vec<LevelDef>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LevelDef {
    // grid cells, row 0 at the bottom
    pub start: (i32, i32),
    #[serde(default)]
    pub scroll: Option<(f64, f64)>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub enum ItemDef {
    Block {
        x: i32,
        y: i32,
        #[serde(default = "one")]
        w: u32,
        #[serde(default = "one")]
        h: u32,
    },
    Exit {
        x: i32,
        y: i32,
    },
}

impl LevelSequenceDef {
    pub fn from_ron(text: &str) -> Result<Self> {
        let seq: LevelSequenceDef = ron::from_str(text)?;
        if seq.version != 1 {
            return Err(LevelError::UnsupportedVersion(seq.version));
        }
        if seq.levels.is_empty() {
            return Err(LevelError::EmptySequence);
        }
        // Scroll only ever moves forward.
        for (level, def) in seq.levels.iter().enumerate() {
            if let Some((x, y)) = def.scroll {
                if !x.is_finite() || !y.is_finite() || x < 0.0 {
                    return Err(LevelError::InvalidScroll { level, x, y });
                }
            }
        }
        Ok(seq)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_ron(EMBEDDED_LEVELS_RON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_levels_parse() {
        let seq = LevelSequenceDef::embedded().unwrap();
        assert!(seq.levels.len() >= 2);
        assert!(seq.levels.iter().all(|l| {
            l.items
                .iter()
                .any(|item| matches!(item, ItemDef::Exit { .. }))
        }));
    }

    #[test]
    fn block_size_defaults_to_one_cell() {
        let seq = LevelSequenceDef::from_ron(
            "(version: 1, levels: [(start: (1, 2), items: [Block(x: 4, y: 0)])])",
        )
        .unwrap();
        let level = &seq.levels[0];
        assert_eq!(level.start, (1, 2));
        assert_eq!(level.scroll, None);
        assert_eq!(
            level.items,
            vec![ItemDef::Block {
                x: 4,
                y: 0,
                w: 1,
                h: 1
            }]
        );
    }

    #[test]
    fn rejects_unknown_version_and_empty_lists() {
        assert!(matches!(
            LevelSequenceDef::from_ron("(version: 2, levels: [(start: (0, 0))])"),
            Err(LevelError::UnsupportedVersion(2))
        ));
        assert!(matches!(
            LevelSequenceDef::from_ron("(version: 1, levels: [])"),
            Err(LevelError::EmptySequence)
        ));
        assert!(matches!(
            LevelSequenceDef::from_ron("(version: 1"),
            Err(LevelError::Parse(_))
        ));
    }

    #[test]
    fn rejects_backward_or_non_finite_scroll() {
        let err = LevelSequenceDef::from_ron(
            "(version: 1, levels: [(start: (0, 0)), (start: (0, 0), scroll: Some((-0.5, 0.0)))])",
        );
        assert!(matches!(
            err,
            Err(LevelError::InvalidScroll { level: 1, x, .. }) if x == -0.5
        ));

        let err = LevelSequenceDef::from_ron(
            "(version: 1, levels: [(start: (0, 0), scroll: Some((inf, 0.0)))])",
        );
        assert!(matches!(err, Err(LevelError::InvalidScroll { level: 0, .. })));

        let seq = LevelSequenceDef::from_ron(
            "(version: 1, levels: [(start: (0, 0), scroll: Some((0.0, 0.0)))])",
        )
        .unwrap();
        assert_eq!(seq.levels[0].scroll, Some((0.0, 0.0)));
    }
}
