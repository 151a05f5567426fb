use super::observation_factory::ObservationFactory;
use crate::engine::types::{Observation, SalesTable};

pub struct SalesTableFactory {
    rows: Vec<Observation>,
}

impl SalesTableFactory {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add(mut self, row: ObservationFactory) -> Self {
        self.rows.push(row.create());
        self
    }

    /// Adds `count` identical rows.
    pub fn add_many(mut self, row: ObservationFactory, count: usize) -> Self {
        let obs = row.create();
        self.rows.extend(std::iter::repeat_n(obs, count));
        self
    }

    pub fn extend(mut self, rows: Vec<Observation>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn create(self) -> SalesTable {
        SalesTable::new(self.rows)
    }
}
