//! Flat builder: a nutrition label with two required and four optional amounts.
//!
//! ```
//! use builder_api_design::NutritionFacts;
//!
//! let cola = NutritionFacts::builder(240, 8)
//!     .calories(100)
//!     .sodium(35)
//!     .carbohydrate(27)
//!     .build()?;
//!
//! assert_eq!(cola.fat(), 0);
//! # Ok::<(), builder_api_design::BuildError>(())
//! ```
//!
//! Both required amounts must be positive. A label with zero servings, such as
//! `builder(1, 0)`, is rejected at `build` time rather than printed as an empty
//! container.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::attribute::{Attribute, AttributeSet};
use crate::error::{BuildError, Result};

/// An immutable nutrition label. Every amount is fixed once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NutritionFacts {
    serving_size: u32,
    servings: u32,
    calories: u32,
    fat: u32,
    sodium: u32,
    carbohydrate: u32,
}

impl NutritionFacts {
    // Required attributes are the only arguments; everything else goes through setters.
    pub fn builder(serving_size: u32, servings: u32) -> NutritionFactsBuilder {
        NutritionFactsBuilder::new(serving_size, servings)
    }

    /// Serving size in millilitres or grams.
    pub fn serving_size(&self) -> u32 {
        self.serving_size
    }

    /// Servings per container.
    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn fat(&self) -> u32 {
        self.fat
    }

    pub fn sodium(&self) -> u32 {
        self.sodium
    }

    pub fn carbohydrate(&self) -> u32 {
        self.carbohydrate
    }

    /// Calories in the whole container.
    pub fn per_container(&self) -> u32 {
        self.calories.saturating_mul(self.servings)
    }
}

impl AttributeSet for NutritionFacts {
    const ATTRIBUTES: &'static [Attribute] = &[
        Attribute::required("serving_size"),
        Attribute::required("servings"),
        Attribute::optional("calories", 0),
        Attribute::optional("fat", 0),
        Attribute::optional("sodium", 0),
        Attribute::optional("carbohydrate", 0),
    ];
}

impl fmt::Display for NutritionFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} | {} kcal, fat {}g, sodium {}mg, carbs {}g",
            self.servings,
            self.serving_size,
            self.calories,
            self.fat,
            self.sodium,
            self.carbohydrate
        )
    }
}

/// Collects the optional amounts; `build` consumes it, so it cannot be reused.
#[must_use = "a builder does nothing unless you call `.build()`"]
#[derive(Debug, Clone)]
pub struct NutritionFactsBuilder {
    serving_size: u32,
    servings: u32,
    calories: u32,
    fat: u32,
    sodium: u32,
    carbohydrate: u32,
}

impl NutritionFactsBuilder {
    pub fn new(serving_size: u32, servings: u32) -> Self {
        NutritionFactsBuilder {
            serving_size,
            servings,
            calories: 0,
            fat: 0,
            sodium: 0,
            carbohydrate: 0,
        }
    }

    pub fn calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    pub fn fat(mut self, fat: u32) -> Self {
        self.fat = fat;
        self
    }

    pub fn sodium(mut self, sodium: u32) -> Self {
        self.sodium = sodium;
        self
    }

    pub fn carbohydrate(mut self, carbohydrate: u32) -> Self {
        self.carbohydrate = carbohydrate;
        self
    }

    pub fn build(self) -> Result<NutritionFacts> {
        if self.serving_size == 0 {
            warn!("rejected nutrition label with zero serving size");
            return Err(BuildError::invalid("serving_size", "must be greater than 0"));
        }
        if self.servings == 0 {
            warn!("rejected nutrition label with zero servings");
            return Err(BuildError::invalid("servings", "must be greater than 0"));
        }

        let facts = NutritionFacts {
            serving_size: self.serving_size,
            servings: self.servings,
            calories: self.calories,
            fat: self.fat,
            sodium: self.sodium,
            carbohydrate: self.carbohydrate,
        };
        debug!(%facts, "built nutrition label");
        Ok(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_required_only_uses_defaults() {
        let facts = NutritionFacts::builder(1, 10).calories(100).build().unwrap();

        assert_eq!(facts.serving_size(), 1);
        assert_eq!(facts.servings(), 10);
        assert_eq!(facts.calories(), 100);
        assert_eq!(facts.fat(), 0);
        assert_eq!(facts.sodium(), 0);
        assert_eq!(facts.carbohydrate(), 0);
    }

    #[test]
    fn test_setter_order_does_not_matter() {
        let a = NutritionFacts::builder(240, 8).sodium(35).calories(100).build();
        let b = NutritionFacts::builder(240, 8).calories(100).sodium(35).build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_last_write_wins() {
        let facts = NutritionFacts::builder(240, 8).fat(3).fat(1).build().unwrap();
        assert_eq!(facts.fat(), 1);
    }

    #[test]
    fn test_zero_serving_size_rejected() {
        let err = NutritionFacts::builder(0, 8).build().unwrap_err();
        assert_eq!(err.attribute(), Some("serving_size"));
    }

    #[test]
    fn test_zero_servings_rejected() {
        let err = NutritionFacts::builder(240, 0).calories(100).build().unwrap_err();
        assert_eq!(err, BuildError::invalid("servings", "must be greater than 0"));
    }

    #[test]
    fn test_single_serving_with_zero_servings_rejected() {
        let result = NutritionFacts::builder(1, 0).build();
        assert_eq!(result.unwrap_err().attribute(), Some("servings"));
    }

    #[test]
    fn test_builder_state_not_shared_with_record() {
        let builder = NutritionFacts::builder(240, 8).calories(100);
        let first = builder.clone().build().unwrap();
        let second = builder.calories(5).build().unwrap();

        assert_eq!(first.calories(), 100);
        assert_eq!(second.calories(), 5);
    }

    #[test]
    fn test_attribute_table_matches_defaults() {
        let facts = NutritionFacts::builder(1, 1).build().unwrap();
        let read = |name: &str| -> u32 {
            match name {
                "calories" => facts.calories(),
                "fat" => facts.fat(),
                "sodium" => facts.sodium(),
                "carbohydrate" => facts.carbohydrate(),
                other => panic!("unexpected optional attribute {other}"),
            }
        };

        for attr in NutritionFacts::optional() {
            assert_eq!(Some(i64::from(read(attr.name))), attr.default_value());
        }
        let required: Vec<_> = NutritionFacts::required().map(|a| a.name).collect();
        assert_eq!(required, vec!["serving_size", "servings"]);
    }

    #[test]
    fn test_per_container_saturates() {
        let facts = NutritionFacts::builder(1, u32::MAX).calories(2).build().unwrap();
        assert_eq!(facts.per_container(), u32::MAX);
    }

    #[test]
    fn test_display() {
        let facts = NutritionFacts::builder(240, 8).calories(100).build().unwrap();
        assert_eq!(
            facts.to_string(),
            "8 x 240 | 100 kcal, fat 0g, sodium 0mg, carbs 0g"
        );
    }

    proptest! {
        #[test]
        fn test_any_subset_of_optionals(
            serving_size in 1u32..1000,
            servings in 1u32..100,
            calories in proptest::option::of(any::<u32>()),
            fat in proptest::option::of(any::<u32>()),
            sodium in proptest::option::of(any::<u32>()),
            carbohydrate in proptest::option::of(any::<u32>()),
        ) {
            let mut builder = NutritionFacts::builder(serving_size, servings);
            if let Some(v) = calories { builder = builder.calories(v); }
            if let Some(v) = fat { builder = builder.fat(v); }
            if let Some(v) = sodium { builder = builder.sodium(v); }
            if let Some(v) = carbohydrate { builder = builder.carbohydrate(v); }
            let facts = builder.build().unwrap();

            prop_assert_eq!(facts.serving_size(), serving_size);
            prop_assert_eq!(facts.servings(), servings);
            prop_assert_eq!(facts.calories(), calories.unwrap_or(0));
            prop_assert_eq!(facts.fat(), fat.unwrap_or(0));
            prop_assert_eq!(facts.sodium(), sodium.unwrap_or(0));
            prop_assert_eq!(facts.carbohydrate(), carbohydrate.unwrap_or(0));
            // Reads are stable.
            prop_assert_eq!(facts.calories(), facts.calories());
        }

        #[test]
        fn test_last_write_wins_for_any_pair(v1 in any::<u32>(), v2 in any::<u32>()) {
            let facts = NutritionFacts::builder(1, 1).sodium(v1).sodium(v2).build().unwrap();
            prop_assert_eq!(facts.sodium(), v2);
        }
    }
}
