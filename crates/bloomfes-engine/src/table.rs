use models::{Cell, DisplayMetric, InvalidSkillLevel, NumericMode, SkillLevelTable};

use crate::axis::BLANK_SENTINEL;
use crate::skill;

/// What the table rows enumerate; the other dimension is fixed for the
/// whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAxis {
    /// Rows are rank values; one skill level applies everywhere.
    Rank { skill_level: u8 },
    /// Rows are the table's skill levels; one rank applies everywhere.
    SkillLevel { rank: u32 },
}

/// Fully materialized comparison grid. Rebuilt from scratch on any
/// parameter change; display-mode switches are projections over the
/// stored cells and never recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    row_axis: RowAxis,
    row_keys: Vec<u32>,
    column_keys: Vec<u32>,
    cells: Vec<Cell>,
}

impl ComparisonTable {
    /// Build a rank-rows table. Fails before producing any cell if the
    /// skill level has no reference entry; no partial grid is returned.
    pub fn build_rank_rows(
        table: &SkillLevelTable,
        skill_level: u8,
        rank_keys: &[u32],
        column_keys: &[u32],
        multiplier: Option<f64>,
    ) -> Result<Self, InvalidSkillLevel> {
        let profile = table.profile(skill_level)?;
        let cells = fill_cells(rank_keys, column_keys, |rank, target| {
            skill::compare(&profile, rank, target, multiplier)
        });
        Ok(Self {
            row_axis: RowAxis::Rank { skill_level },
            row_keys: rank_keys.to_vec(),
            column_keys: column_keys.to_vec(),
            cells,
        })
    }

    /// Build a skill-level-rows table at a fixed rank. Row keys are the
    /// reference table's levels, ascending.
    pub fn build_level_rows(
        table: &SkillLevelTable,
        rank: u32,
        column_keys: &[u32],
        multiplier: Option<f64>,
    ) -> Result<Self, InvalidSkillLevel> {
        let levels = table.levels();
        let row_keys: Vec<u32> = levels.iter().map(|l| u32::from(*l)).collect();

        let mut cells = Vec::with_capacity(row_keys.len() * column_keys.len());
        for level in &levels {
            let profile = table.profile(*level)?;
            for target in column_keys {
                cells.push(evaluate_cell(*target, |t| {
                    skill::compare(&profile, rank, t, multiplier)
                }));
            }
        }

        Ok(Self {
            row_axis: RowAxis::SkillLevel { rank },
            row_keys,
            column_keys: column_keys.to_vec(),
            cells,
        })
    }

    pub fn row_axis(&self) -> RowAxis {
        self.row_axis
    }

    pub fn row_keys(&self) -> &[u32] {
        &self.row_keys
    }

    pub fn column_keys(&self) -> &[u32] {
        &self.column_keys
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.row_keys.len() || col >= self.column_keys.len() {
            return None;
        }
        self.cells.get(row * self.column_keys.len() + col)
    }

    /// Project one stored cell into a displayed number. Blank cells and
    /// out-of-range indices yield `None`.
    pub fn project(
        &self,
        row: usize,
        col: usize,
        mode: NumericMode,
        metric: DisplayMetric,
    ) -> Option<f64> {
        let values = self.cell(row, col)?.values()?;
        let comparison = match mode {
            NumericMode::Integer => &values.integer,
            NumericMode::Fractional => &values.fractional,
        };
        Some(match metric {
            DisplayMetric::Highest => comparison.highest,
            DisplayMetric::Difference => comparison.difference,
        })
    }
}

fn fill_cells(
    row_keys: &[u32],
    column_keys: &[u32],
    evaluate: impl Fn(u32, u32) -> models::CellValues,
) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(row_keys.len() * column_keys.len());
    for row in row_keys {
        for target in column_keys {
            cells.push(evaluate_cell(*target, |t| evaluate(*row, t)));
        }
    }
    cells
}

fn evaluate_cell(target: u32, evaluate: impl Fn(u32) -> models::CellValues) -> Cell {
    if target == BLANK_SENTINEL {
        Cell::Blank
    } else {
        Cell::Value(evaluate(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Winner;

    fn reference() -> SkillLevelTable {
        SkillLevelTable::bloomfes_defaults()
    }

    #[test]
    fn rank_rows_grid_shape_and_values() {
        let table = ComparisonTable::build_rank_rows(
            &reference(),
            1,
            &[10, 50, 100],
            &[80, 100, 140],
            None,
        )
        .unwrap();

        assert_eq!(table.row_keys(), &[10, 50, 100]);
        assert_eq!(table.column_keys(), &[80, 100, 140]);

        // rank 50 / target 100 is the known level-1 vector
        let cell = table.cell(1, 1).unwrap().values().unwrap();
        assert_eq!(cell.integer.after, 115.0);
        assert_eq!(cell.integer.before, 110.0);
        assert_eq!(cell.integer.winner, Winner::After);
    }

    #[test]
    fn sentinel_column_yields_blank_cells() {
        let table =
            ComparisonTable::build_rank_rows(&reference(), 1, &[50], &[80, BLANK_SENTINEL, 100], None)
                .unwrap();

        assert!(!table.cell(0, 0).unwrap().is_blank());
        assert!(table.cell(0, 1).unwrap().is_blank());
        assert!(!table.cell(0, 2).unwrap().is_blank());
        assert_eq!(
            table.project(0, 1, NumericMode::Integer, DisplayMetric::Highest),
            None
        );
    }

    #[test]
    fn invalid_level_aborts_whole_build() {
        let err = ComparisonTable::build_rank_rows(&reference(), 9, &[50], &[100], None);
        assert_eq!(err, Err(InvalidSkillLevel(9)));
    }

    #[test]
    fn level_rows_use_reference_levels() {
        let table = ComparisonTable::build_level_rows(&reference(), 50, &[100], None).unwrap();
        assert_eq!(table.row_keys(), &[1, 2, 3, 4]);
        assert_eq!(table.row_axis(), RowAxis::SkillLevel { rank: 50 });

        // level 4 at rank 50: after = min(110 + 25, 160) = 135
        let cell = table.cell(3, 0).unwrap().values().unwrap();
        assert_eq!(cell.integer.after, 135.0);
    }

    #[test]
    fn identical_inputs_build_equal_grids() {
        let a = ComparisonTable::build_rank_rows(
            &reference(),
            2,
            &[10, 20, 30],
            &[80, 90, 0, 110],
            Some(10.0),
        )
        .unwrap();
        let b = ComparisonTable::build_rank_rows(
            &reference(),
            2,
            &[10, 20, 30],
            &[80, 90, 0, 110],
            Some(10.0),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn projection_switches_without_rebuilding() {
        let table =
            ComparisonTable::build_rank_rows(&reference(), 1, &[50], &[100], None).unwrap();

        let highest = table
            .project(0, 0, NumericMode::Integer, DisplayMetric::Highest)
            .unwrap();
        let difference = table
            .project(0, 0, NumericMode::Integer, DisplayMetric::Difference)
            .unwrap();
        assert_eq!(highest, 115.0);
        assert_eq!(difference, -5.0);

        let frac = table
            .project(0, 0, NumericMode::Fractional, DisplayMetric::Highest)
            .unwrap();
        assert_eq!(frac, 115.0);
    }

    #[test]
    fn out_of_range_indices_are_none() {
        let table =
            ComparisonTable::build_rank_rows(&reference(), 1, &[50], &[100], None).unwrap();
        assert!(table.cell(1, 0).is_none());
        assert!(table.cell(0, 1).is_none());
    }
}
