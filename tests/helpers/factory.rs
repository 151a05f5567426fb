pub use super::factories::{ObservationFactory, SalesTableFactory};

pub struct Factory;

impl Factory {
    pub fn observation() -> ObservationFactory {
        ObservationFactory::new()
    }

    pub fn sales_table() -> SalesTableFactory {
        SalesTableFactory::new()
    }
}
