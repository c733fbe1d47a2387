//! Grid map: immutable tile storage plus the queries movement and
//! raycasting need.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has {actual} tiles, expected {expected}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("unknown map symbol {0:?}")]
    UnknownSymbol(char),
    #[error("tile ({col}, {row}) is outside the grid")]
    OutOfBounds { col: i32, row: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Start,
    End,
}

impl Tile {
    fn from_symbol(c: char) -> Result<Self, MapError> {
        match c {
            '.' => Ok(Tile::Empty),
            '#' => Ok(Tile::Wall),
            'S' => Ok(Tile::Start),
            'E' => Ok(Tile::End),
            other => Err(MapError::UnknownSymbol(other)),
        }
    }
}

/// Row-major tile grid. Built once at startup, never mutated.
#[derive(Debug)]
pub struct GridMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl GridMap {
    /// Parse a flat symbol string. Fails fast on a length mismatch or a
    /// symbol outside the map alphabet.
    pub fn parse(data: &str, width: usize, height: usize) -> Result<Self, MapError> {
        let tiles: Vec<Tile> = data
            .chars()
            .map(Tile::from_symbol)
            .collect::<Result<_, _>>()?;
        if tiles.len() != width * height {
            return Err(MapError::InvalidLength {
                expected: width * height,
                actual: tiles.len(),
            });
        }
        Ok(Self { width, height, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && (col as usize) < self.width && row >= 0 && (row as usize) < self.height
    }

    pub fn tile_at(&self, col: i32, row: i32) -> Result<Tile, MapError> {
        if !self.in_bounds(col, row) {
            return Err(MapError::OutOfBounds { col, row });
        }
        Ok(self.tiles[row as usize * self.width + col as usize])
    }

    /// True iff the cell is in bounds and a wall. Wall is the only tile
    /// kind that blocks rays and movement.
    pub fn is_wall(&self, col: i32, row: i32) -> bool {
        matches!(self.tile_at(col, row), Ok(Tile::Wall))
    }

    /// Whether the cell under a world position rejects movement. Positions
    /// whose floored cell falls outside the grid block as well.
    pub fn blocks(&self, x: f32, y: f32) -> bool {
        let col = x.floor() as i32;
        let row = y.floor() as i32;
        match self.tile_at(col, row) {
            Ok(tile) => tile == Tile::Wall,
            Err(_) => true,
        }
    }

    /// First cell holding `tile`, scanning row-major. Used to locate the
    /// start and exit markers.
    pub fn find(&self, tile: Tile) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&t| t == tile)
            .map(|i| (i % self.width, i / self.width))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width)
    }
}
