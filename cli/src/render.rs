use bloomfes_engine::{ComparisonTable, RowAxis, BLANK_SENTINEL};
use models::{DisplayMetric, NumericMode};

const CELL_WIDTH: usize = 8;

/// Render a computed table as a plain-text grid. Sentinel columns and
/// blank cells come out empty; integer mode prints whole numbers,
/// fractional mode one decimal place.
pub fn render_table(table: &ComparisonTable, mode: NumericMode, metric: DisplayMetric) -> String {
    let label = match table.row_axis() {
        RowAxis::Rank { .. } => "rank",
        RowAxis::SkillLevel { .. } => "level",
    };

    let mut out = String::new();

    out.push_str(&format!("{label:>6} |"));
    for col in table.column_keys() {
        if *col == BLANK_SENTINEL {
            out.push_str(&format!("{:>CELL_WIDTH$}", ""));
        } else {
            out.push_str(&format!("{col:>CELL_WIDTH$}"));
        }
    }
    out.push('\n');

    out.push_str("-------+");
    out.push_str(&"-".repeat(CELL_WIDTH * table.column_keys().len()));
    out.push('\n');

    for (row, key) in table.row_keys().iter().enumerate() {
        out.push_str(&format!("{key:>6} |"));
        for col in 0..table.column_keys().len() {
            match table.project(row, col, mode, metric) {
                None => out.push_str(&format!("{:>CELL_WIDTH$}", "")),
                Some(value) => match mode {
                    NumericMode::Integer => {
                        out.push_str(&format!("{:>CELL_WIDTH$}", value as i64))
                    }
                    NumericMode::Fractional => {
                        out.push_str(&format!("{value:>CELL_WIDTH$.1}"))
                    }
                },
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::SkillLevelTable;

    #[test]
    fn renders_known_values_and_blanks() {
        let reference = SkillLevelTable::bloomfes_defaults();
        let table = ComparisonTable::build_rank_rows(
            &reference,
            1,
            &[50],
            &[100, BLANK_SENTINEL],
            None,
        )
        .unwrap();

        let text = render_table(&table, NumericMode::Integer, DisplayMetric::Highest);
        assert!(text.contains("115"));

        // sentinel column renders empty in header and body
        let header: Vec<&str> = text.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["rank", "|", "100"]);
        let body: Vec<&str> = text.lines().nth(2).unwrap().split_whitespace().collect();
        assert_eq!(body, vec!["50", "|", "115"]);
    }

    #[test]
    fn fractional_mode_prints_one_decimal() {
        let reference = SkillLevelTable::bloomfes_defaults();
        let table =
            ComparisonTable::build_rank_rows(&reference, 1, &[51], &[101], None).unwrap();

        let text = render_table(&table, NumericMode::Fractional, DisplayMetric::Highest);
        assert!(text.contains("115.5"));
    }
}
