use std::env;
use sdk::*;
use day02_cube_conundrum::solve;

const DEFAULT_INPUT: &str = "day02_cube_conundrum/input.txt";

fn main() -> Result<()> {
    init();
    let path = env::args()
        .nth(1)
        .or_else(|| env::var("CUBE_INPUT").ok())
        .unwrap_or_else(|| DEFAULT_INPUT.to_owned());
    debug!("Reading games from {path}");
    let input = read_input(&path)?;

    let answers = solve(&input)?;
    info!("Valid game ID sum: {}", answers.feasibility_sum);
    info!("Minimum bag power sum: {}", answers.power_sum);
    Ok(())
}
