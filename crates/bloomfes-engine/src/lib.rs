pub mod axis;
pub mod skill;
pub mod table;

pub use axis::{generate_range, generate_rank_axis, GeneratedRange, BLANK_SENTINEL};
pub use table::{ComparisonTable, RowAxis};
