mod builder;
mod grid;

pub use builder::{MONTHS, TrendPoint, make_trend_data};
pub use grid::{TrendGrid, TrendGridRow};

#[cfg(test)]
mod builder_test;
