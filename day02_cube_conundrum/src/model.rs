use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use crate::error::CubeError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSet {
    pub games: Vec<Game>,
}

impl GameSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl<'a> IntoIterator for &'a GameSet {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub moves: Vec<Move>,
}

/// One handful of cubes pulled out of the bag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Move {
    pub cubes: Vec<CubeGroup>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CubeGroup {
    pub count: u32,
    pub color: Color,
}

#[derive(Debug, Copy, Clone, Hash, PartialOrd, Ord, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl FromStr for Color {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            other => Err(CubeError::Color(other.to_owned())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Cube totals per color, either for a single move or the minimum bag for a game.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ResourceCounts {
    pub red: u64,
    pub green: u64,
    pub blue: u64,
}

impl ResourceCounts {
    pub const fn new(red: u64, green: u64, blue: u64) -> Self {
        ResourceCounts { red, green, blue }
    }

    pub fn max(self, other: Self) -> Self {
        ResourceCounts {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    pub fn power(self) -> u64 {
        self.red.saturating_mul(self.green).saturating_mul(self.blue)
    }

    /// True if no color exceeds what `bag` holds.
    pub fn fits_within(&self, bag: &ResourceCounts) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }
}

impl From<CubeGroup> for ResourceCounts {
    fn from(group: CubeGroup) -> Self {
        let count = u64::from(group.count);
        let mut counts = ResourceCounts::default();
        match group.color {
            Color::Red => counts.red = count,
            Color::Green => counts.green = count,
            Color::Blue => counts.blue = count,
        }
        counts
    }
}

impl Add for ResourceCounts {
    type Output = ResourceCounts;

    fn add(self, rhs: Self) -> Self::Output {
        ResourceCounts {
            red: self.red.saturating_add(rhs.red),
            green: self.green.saturating_add(rhs.green),
            blue: self.blue.saturating_add(rhs.blue),
        }
    }
}

impl Sum for ResourceCounts {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(ResourceCounts::default(), |a, b| a + b)
    }
}
