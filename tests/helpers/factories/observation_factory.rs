use crate::engine::types::{Dimension, Observation, ObservationBuilder, PricePer};
use rand::Rng;
use std::collections::HashMap;

pub struct ObservationFactory {
    year: i32,
    month: u32,
    price: Option<f64>,
    price_per: Option<PricePer>,
    dimensions: HashMap<Dimension, String>,
}

impl ObservationFactory {
    pub fn new() -> Self {
        let mut dimensions = HashMap::new();
        dimensions.insert(Dimension::Currency, "EUR".to_string());
        dimensions.insert(Dimension::Country, "France".to_string());
        Self {
            year: 2023,
            month: 1,
            price: Some(1.0),
            price_per: Some(PricePer::Unit),
            dimensions,
        }
    }

    pub fn with(mut self, dimension: Dimension, value: &str) -> Self {
        self.dimensions.insert(dimension, value.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn without_price(mut self) -> Self {
        self.price = None;
        self
    }

    pub fn with_price_per(mut self, price_per: PricePer) -> Self {
        self.price_per = Some(price_per);
        self
    }

    pub fn per_kilogram(self) -> Self {
        self.with_price_per(PricePer::Kilogram)
    }

    pub fn per_unit(self) -> Self {
        self.with_price_per(PricePer::Unit)
    }

    pub fn with_product(self, value: &str) -> Self {
        self.with(Dimension::Product, value)
    }

    pub fn with_category(self, value: &str) -> Self {
        self.with(Dimension::Category, value)
    }

    pub fn with_currency(self, value: &str) -> Self {
        self.with(Dimension::Currency, value)
    }

    pub fn with_country(self, value: &str) -> Self {
        self.with(Dimension::Country, value)
    }

    pub fn with_store(self, value: &str) -> Self {
        self.with(Dimension::Store, value)
    }

    pub fn create(self) -> Observation {
        let mut builder = ObservationBuilder::from_year_month(self.year, self.month)
            .expect("factory month must be 1-12");
        if let Some(price) = self.price {
            builder = builder.price(price);
        }
        if let Some(price_per) = self.price_per {
            builder = builder.price_per(price_per);
        }
        for (dimension, value) in self.dimensions {
            builder = builder.dimension(dimension, value);
        }
        builder.build()
    }

    /// Creates `count` copies with random months and prices.
    pub fn create_list(self, count: usize) -> Vec<Observation> {
        let mut rng = rand::thread_rng();
        let template = self.create();
        (0..count)
            .map(|_| {
                let mut obs = template.clone();
                obs.month = rng.gen_range(1..=12);
                obs.price = Some(rng.gen_range(1..=5000) as f64 / 100.0);
                obs.price_per = Some(if rng.gen_bool(0.5) {
                    PricePer::Kilogram
                } else {
                    PricePer::Unit
                });
                obs
            })
            .collect()
    }
}
