pub mod condition;
pub mod row_filter;

pub use condition::{
    Condition, ConjunctiveCondition, DimensionCondition, PricePerCondition, YearCondition,
};
pub use row_filter::{RowFilter, filter_rows};
