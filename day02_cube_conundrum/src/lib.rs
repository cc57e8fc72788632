//! Cube Conundrum: parse a record of games played with a bag of colored cubes,
//! then find which games the bag could have produced and how small the bag could be.
//!
//! ```text
//! Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
//! ```

pub mod error;
pub mod eval;
pub mod model;
pub mod parse;

pub use error::{CubeError, IdError, MoveError, ParseError};
pub use eval::{feasibility_sum, feasibility_sum_with, power_sum, BAG, MAX_BLUE, MAX_GREEN, MAX_RED};
pub use model::{Color, CubeGroup, Game, GameSet, Move, ResourceCounts};
pub use parse::parse;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Answers {
    pub feasibility_sum: u64,
    pub power_sum: u64,
}

pub fn compute_feasibility_sum(input: &str) -> Result<u64, ParseError> {
    Ok(feasibility_sum(&parse(input)?))
}

pub fn compute_power_sum(input: &str) -> Result<u64, ParseError> {
    Ok(power_sum(&parse(input)?))
}

/// Parses once and computes both answers.
pub fn solve(input: &str) -> Result<Answers, ParseError> {
    let games = parse(input)?;
    Ok(Answers {
        feasibility_sum: feasibility_sum(&games),
        power_sum: power_sum(&games),
    })
}

#[cfg(test)]
mod tests {
    use sdk::{init, Result};
    use crate::{compute_feasibility_sum, compute_power_sum, solve, Answers, ParseError};

    static INPUT: &str = r#"Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green"#;

    #[test]
    fn feasibility_sum_works() -> Result<()> {
        init();
        let result = compute_feasibility_sum(INPUT)?;
        assert_eq!(8, result);
        Ok(())
    }

    #[test]
    fn power_sum_works() -> Result<()> {
        init();
        let result = compute_power_sum(INPUT)?;
        assert_eq!(2286, result);
        Ok(())
    }

    #[test]
    fn solve_matches() -> Result<()> {
        let answers = solve(INPUT)?;
        assert_eq!(Answers { feasibility_sum: 8, power_sum: 2286 }, answers);
        assert_eq!(answers, solve(INPUT)?);
        Ok(())
    }

    #[test]
    fn empty_input() -> Result<()> {
        assert_eq!(0, compute_feasibility_sum("")?);
        assert_eq!(0, compute_power_sum("")?);
        Ok(())
    }

    #[test]
    fn ids_need_not_be_sorted() -> Result<()> {
        let input = "Game 10: 1 red, 1 green, 1 blue\nGame 3: 2 red, 2 green, 2 blue\n";
        assert_eq!(13, compute_feasibility_sum(input)?);
        assert_eq!(9, compute_power_sum(input)?);
        Ok(())
    }

    #[test]
    fn malformed_input_has_no_result() {
        let bad = format!("{INPUT}\nGame 6: 1 orange");
        assert!(matches!(compute_feasibility_sum(&bad), Err(ParseError::Move { line: 6, .. })));
        assert!(matches!(compute_power_sum(&bad), Err(ParseError::Move { line: 6, .. })));
        assert!(solve("Game 1 1 red").is_err());
    }
}
