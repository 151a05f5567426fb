pub mod observation_factory;
pub mod sales_table_factory;

pub use observation_factory::ObservationFactory;
pub use sales_table_factory::SalesTableFactory;

#[cfg(test)]
mod sales_table_factory_test;
