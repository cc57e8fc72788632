use sdk::{debug, trace};
use crate::model::{Game, GameSet, Move, ResourceCounts};

pub const MAX_RED: u64 = 12;
pub const MAX_GREEN: u64 = 13;
pub const MAX_BLUE: u64 = 14;

/// The cubes actually in the bag each game is played with.
pub const BAG: ResourceCounts = ResourceCounts::new(MAX_RED, MAX_GREEN, MAX_BLUE);

impl Move {
    /// Totals per color. Groups of the same color add up.
    pub fn counts(&self) -> ResourceCounts {
        self.cubes.iter().copied().map(ResourceCounts::from).sum()
    }
}

impl Game {
    pub fn is_feasible(&self) -> bool {
        self.is_feasible_with(&BAG)
    }

    pub fn is_feasible_with(&self, bag: &ResourceCounts) -> bool {
        for m in &self.moves {
            let counts = m.counts();
            if !counts.fits_within(bag) {
                debug!("Game {}: {counts:?} has a color greater than max {bag:?}", self.id);
                return false;
            }
        }
        true
    }

    /// Smallest bag that could have produced every move of this game.
    pub fn min_counts(&self) -> ResourceCounts {
        self.moves
            .iter()
            .map(Move::counts)
            .fold(ResourceCounts::default(), ResourceCounts::max)
    }
}

pub fn feasibility_sum(games: &GameSet) -> u64 {
    feasibility_sum_with(games, &BAG)
}

pub fn feasibility_sum_with(games: &GameSet, bag: &ResourceCounts) -> u64 {
    games
        .iter()
        .filter(|game| game.is_feasible_with(bag))
        .map(|game| u64::from(game.id))
        .fold(0, u64::saturating_add)
}

pub fn power_sum(games: &GameSet) -> u64 {
    games
        .iter()
        .map(|game| {
            let bag = game.min_counts();
            trace!("Game {}: minimum bag {bag:?}, power {}", game.id, bag.power());
            bag.power()
        })
        .fold(0, u64::saturating_add)
}
