use std::str::FromStr;
use sdk::trace;
use crate::error::{CubeError, IdError, MoveError, ParseError};
use crate::model::{Color, CubeGroup, Game, GameSet, Move};

const HEADER_SEPARATOR: &str = ": ";
const MOVE_SEPARATOR: &str = "; ";
const CUBE_SEPARATOR: &str = ", ";

/// Parses one game per line. The first bad line aborts the whole parse.
pub fn parse(input: &str) -> Result<GameSet, ParseError> {
    let games = input
        .lines()
        .enumerate()
        .map(|(i, line)| parse_game(i + 1, line))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(GameSet { games })
}

impl FromStr for GameSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

// Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
fn parse_game(line: usize, text: &str) -> Result<Game, ParseError> {
    trace!("Parsing line {line}: {text}");
    let (header, body) = text.split_once(HEADER_SEPARATOR).ok_or_else(|| ParseError::Structure {
        line,
        text: text.to_owned(),
    })?;

    let id = parse_id(header).map_err(|source| ParseError::Identifier {
        line,
        header: header.to_owned(),
        source,
    })?;

    let moves = body
        .split(MOVE_SEPARATOR)
        .map(|m| {
            parse_move(m).map_err(|source| ParseError::Move {
                line,
                text: m.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let game = Game { id, moves };
    trace!("Parsed {game:?}");
    Ok(game)
}

// Game 4
fn parse_id(header: &str) -> Result<u32, IdError> {
    let tokens: Vec<&str> = header.split_whitespace().collect();
    let [_, id] = tokens[..] else {
        return Err(IdError::TokenCount { found: tokens.len() });
    };
    u32::from_str(id).map_err(|source| IdError::Number {
        token: id.to_owned(),
        source,
    })
}

// 1 green, 3 red, 6 blue
fn parse_move(text: &str) -> Result<Move, MoveError> {
    trace!("Parsing move from {text}");
    let cubes = text
        .split(CUBE_SEPARATOR)
        .map(|cube| {
            parse_cube(cube).map_err(|source| MoveError {
                cube: cube.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Move { cubes })
}

// 3 red
fn parse_cube(text: &str) -> Result<CubeGroup, CubeError> {
    let tokens: Vec<&str> = text.split(' ').collect();
    let [count, color] = tokens[..] else {
        return Err(CubeError::Shape(text.to_owned()));
    };
    let count = u32::from_str(count).map_err(|source| CubeError::Count {
        token: count.to_owned(),
        source,
    })?;
    let color = Color::from_str(color)?;
    Ok(CubeGroup { count, color })
}
