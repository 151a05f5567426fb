use super::builder::{MONTHS, make_trend_data};
use crate::engine::types::{Dimension, SalesTable};
use crate::test_helpers::factory::Factory;

fn sample() -> SalesTable {
    Factory::sales_table()
        .add(Factory::observation().with_product("A").with_month(1))
        .add(Factory::observation().with_product("A").with_month(2))
        .add(Factory::observation().with_product("B").with_month(1))
        .add_many(Factory::observation().with_product("B").with_month(3), 2)
        .add(Factory::observation().with_product("B").with_month(3).with_year(2022))
        .add(Factory::observation().with_product("B").with_month(4).with_currency("USD"))
        .create()
}

#[test]
fn scenario_c_no_rows_gives_twelve_zero_months() {
    let table = sample();

    let points = make_trend_data(
        &table,
        Dimension::Currency,
        Dimension::Product,
        "EUR",
        Some(2023),
        &["X"],
    );

    assert_eq!(points.len(), 12);
    assert_eq!(
        points.iter().map(|p| p.month).collect::<Vec<_>>(),
        MONTHS.collect::<Vec<_>>()
    );
    assert!(points.iter().all(|p| p.count == 0 && p.item == "X"));
}

#[test]
fn blocks_follow_selection_order_with_dense_months() {
    let table = sample();

    let points = make_trend_data(
        &table,
        Dimension::Currency,
        Dimension::Product,
        "EUR",
        Some(2023),
        &["B".to_string(), "A".to_string()],
    );

    assert_eq!(points.len(), 24);
    assert!(points[..12].iter().all(|p| p.item == "B"));
    assert!(points[12..].iter().all(|p| p.item == "A"));
    for block in points.chunks(12) {
        let months: Vec<u32> = block.iter().map(|p| p.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<_>>());
    }

    let b: Vec<u64> = points[..12].iter().map(|p| p.count).collect();
    assert_eq!(b, vec![1, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    let a: Vec<u64> = points[12..].iter().map(|p| p.count).collect();
    assert_eq!(a, vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn counts_sum_to_matching_rows() {
    let table = Factory::sales_table()
        .extend(Factory::observation().with_product("Milk").create_list(40))
        .create();

    let points = make_trend_data(
        &table,
        Dimension::Currency,
        Dimension::Product,
        "EUR",
        Some(2023),
        &["Milk"],
    );

    assert_eq!(points.len(), 12);
    assert_eq!(points.iter().map(|p| p.count).sum::<u64>(), 40);
}

#[test]
fn empty_table_yields_zero_rows_per_item() {
    let table = SalesTable::default();

    let points = make_trend_data(
        &table,
        Dimension::Country,
        Dimension::Category,
        "France",
        None,
        &["Dairy", "Bakery"],
    );

    assert_eq!(points.len(), 24);
    assert!(points.iter().all(|p| p.count == 0));
}

#[test]
fn no_selected_items_yields_no_points() {
    let table = sample();
    let none: [&str; 0] = [];

    let points = make_trend_data(
        &table,
        Dimension::Currency,
        Dimension::Product,
        "EUR",
        Some(2023),
        &none,
    );

    assert!(points.is_empty());
}
