mod observation;
mod schema;
mod table;

pub use observation::{Observation, ObservationBuilder};
pub use schema::{Column, Dimension, PricePer};
pub use table::{RowSet, SalesTable};

#[cfg(test)]
mod observation_test;
