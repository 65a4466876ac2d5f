use std::{cmp::max, collections::HashSet, str::FromStr};

use itertools::Itertools;
use log::{debug, trace};

use crate::{error::Error, parser::parse_row};

/// A `(row, col)` grid position. Signed so that off-grid queries are representable.
pub type Location = (i64, i64);

/// Up, left, down, right. Callers rely on this order.
const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Elevation that never belongs to a basin.
const BASIN_WALL: i64 = 9;

/// Elevation reported for positions that hold no cell.
pub const MISSING: i64 = -1;

/// Grid of single-digit elevations, appended one row at a time.
///
/// Rows may have different lengths; `n_cols` tracks the widest row seen and
/// positions past the end of a shorter row read as [`MISSING`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heightmap {
    rows: Vec<Vec<u8>>,
    n_cols: usize,
}

impl Heightmap {
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends `text` as the next row.
    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let row = parse_row(self.rows.len(), text)?;
        self.n_cols = max(self.n_cols, row.len());
        self.rows.push(row);
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn get(&self, row: i64, col: i64) -> Option<u8> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;

        self.rows.get(row)?.get(col).copied()
    }

    /// Elevation at `(row, col)`, or [`MISSING`] if there is no cell there.
    pub fn at(&self, row: i64, col: i64) -> i64 {
        self.get(row, col).map_or(MISSING, i64::from)
    }

    /// Every position of the `n_rows` x `n_cols` bounding box, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Location> {
        (0..self.n_rows() as i64).cartesian_product(0..self.n_cols() as i64)
    }

    pub fn neighbour_locations(&self, row: i64, col: i64) -> Vec<Location> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|(dr, dc)| (row + dr, col + dc))
            .filter(|&(r, c)| self.at(r, c) != MISSING)
            .collect()
    }

    pub fn neighbour_heights(&self, row: i64, col: i64) -> Vec<i64> {
        self.neighbour_locations(row, col)
            .into_iter()
            .map(|(r, c)| self.at(r, c))
            .collect()
    }

    /// A cell lower than all of its neighbours. A cell with no neighbours
    /// qualifies; a missing cell never does.
    pub fn is_low_point(&self, row: i64, col: i64) -> bool {
        match self.get(row, col) {
            Some(height) => self
                .neighbour_heights(row, col)
                .into_iter()
                .all(|neighbour| neighbour > i64::from(height)),
            None => false,
        }
    }

    pub fn low_points(&self) -> impl Iterator<Item = Location> + '_ {
        self.cells().filter(move |&(r, c)| self.is_low_point(r, c))
    }

    pub fn risk_level_at(&self, row: i64, col: i64) -> i64 {
        if self.is_low_point(row, col) {
            self.at(row, col) + 1
        } else {
            0
        }
    }

    /// Flood-fills outward from `(row, col)` through cells below [`BASIN_WALL`],
    /// inserting every cell reached into `basin`.
    ///
    /// The starting cell is not inserted up front. It only ends up in `basin`
    /// when one of its neighbours reaches back to it.
    pub fn explore_basin(&self, basin: &mut HashSet<Location>, row: i64, col: i64) {
        let mut pending = vec![(row, col)];

        while let Some((r, c)) = pending.pop() {
            for neighbour in self.neighbour_locations(r, c) {
                if self.at(neighbour.0, neighbour.1) == BASIN_WALL {
                    continue;
                }

                if basin.insert(neighbour) {
                    pending.push(neighbour);
                }
            }
        }
    }

    /// Size of the basin drained by the low point at `(row, col)`.
    ///
    /// Cells that are not low points report 1, which is not a real basin size.
    /// A low point walled in on every side reports 0, since nothing reaches
    /// back to it during exploration.
    pub fn basin_size_at(&self, row: i64, col: i64) -> usize {
        if !self.is_low_point(row, col) {
            return 1;
        }

        let mut basin = HashSet::new();
        self.explore_basin(&mut basin, row, col);

        trace!("basin at ({}, {}) has {} cells", row, col, basin.len());
        basin.len()
    }
}

impl FromStr for Heightmap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut heightmap = Heightmap::new();
        for line in s.trim_end().lines() {
            heightmap.add_row(line)?;
        }

        if heightmap.n_rows() == 0 {
            return Err(Error::EmptyInput);
        }

        debug!(
            "loaded heightmap with {} rows and {} columns",
            heightmap.n_rows(),
            heightmap.n_cols()
        );
        Ok(heightmap)
    }
}
