mod options;
mod top_n;

pub use options::{
    FilterTarget, available_years, default_choice, default_items, filter_values, item_options,
};
pub use top_n::TopN;
