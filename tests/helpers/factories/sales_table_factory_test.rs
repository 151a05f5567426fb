use crate::engine::types::{Dimension, PricePer};
use crate::test_helpers::factory::Factory;

#[test]
fn add_many_repeats_rows() {
    let table = Factory::sales_table()
        .add_many(Factory::observation().with_product("A"), 3)
        .add(Factory::observation().with_product("B").per_kilogram())
        .create();

    assert_eq!(table.len(), 4);
    assert_eq!(table.rows()[3].price_per, Some(PricePer::Kilogram));
    assert_eq!(table.rows()[0].dimension(Dimension::Currency), Some("EUR"));
}

#[test]
fn create_list_keeps_dimensions_and_valid_months() {
    let rows = Factory::observation().with_product("Milk").create_list(50);

    assert_eq!(rows.len(), 50);
    assert!(rows.iter().all(|o| (1..=12).contains(&o.month)));
    assert!(rows.iter().all(|o| o.dimension(Dimension::Product) == Some("Milk")));
}
