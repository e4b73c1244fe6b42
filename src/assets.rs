//! Text sprites for the background, the bird and the pipes.
//!
//! A sprite is a block of characters; spaces are transparent. The three
//! sprites must all load before a session can exist.

use crate::error::AssetError;
use std::fs;
use std::path::Path;

pub const BACKGROUND_FILE: &str = "back.txt";
pub const BIRD_FILE: &str = "bird.txt";
pub const PIPE_FILE: &str = "pipe.txt";

const BUILTIN_BACKGROUND: &str = include_str!("../assets/back.txt");
const BUILTIN_BIRD: &str = include_str!("../assets/bird.txt");
const BUILTIN_PIPE: &str = include_str!("../assets/pipe.txt");

/// A rectangular block of characters. Short rows are padded with spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Sprite {
    /// Parse sprite text. Returns `None` when nothing is drawable.
    pub fn parse(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Some(Self { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at `(row, col)`, clamped to the sprite's edges.
    pub fn cell(&self, row: usize, col: usize) -> char {
        let row = row.min(self.height().saturating_sub(1));
        let col = col.min(self.width.saturating_sub(1));
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(' ')
    }

    /// Nearest-neighbour sample at fractional coordinates in `[0, 1)`.
    pub fn sample(&self, u: f64, v: f64) -> char {
        let col = (u.clamp(0.0, 1.0) * self.width as f64) as usize;
        let row = (v.clamp(0.0, 1.0) * self.height() as f64) as usize;
        self.cell(row, col)
    }
}

/// The three sprites a game needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSet {
    pub background: Sprite,
    pub bird: Sprite,
    pub pipe: Sprite,
}

impl SpriteSet {
    /// Load `back.txt`, `bird.txt` and `pipe.txt` from `dir`. Any failure is
    /// returned as-is; there is no fallback.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let set = Self {
            background: load_sprite(dir, BACKGROUND_FILE)?,
            bird: load_sprite(dir, BIRD_FILE)?,
            pipe: load_sprite(dir, PIPE_FILE)?,
        };
        tracing::info!(dir = %dir.display(), "sprites loaded");
        Ok(set)
    }

    /// The sprites shipped with the game.
    pub fn builtin() -> Self {
        Self {
            background: builtin_sprite(BUILTIN_BACKGROUND),
            bird: builtin_sprite(BUILTIN_BIRD),
            pipe: builtin_sprite(BUILTIN_PIPE),
        }
    }
}

fn load_sprite(dir: &Path, name: &str) -> Result<Sprite, AssetError> {
    let path = dir.join(name);
    let text = fs::read_to_string(&path).map_err(|source| AssetError::Read {
        path: path.clone(),
        source,
    })?;
    Sprite::parse(&text).ok_or(AssetError::Empty(path))
}

fn builtin_sprite(text: &str) -> Sprite {
    // The shipped files are never blank.
    Sprite::parse(text).unwrap_or(Sprite {
        rows: vec![vec!['#']],
        width: 1,
    })
}
