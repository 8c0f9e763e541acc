//! Hierarchical builders: a family of pizzas sharing a topping list, where each
//! kind adds its own attributes.
//!
//! The shared mutators live on [`PizzaBuilder`] as provided methods returning
//! `Self`, so a chain started on a concrete builder keeps its concrete type:
//!
//! ```
//! use builder_api_design::pizza::{NyPizza, PizzaBuilder, Size, Topping};
//!
//! let pizza = NyPizza::builder()
//!     .add_topping(Topping::Sausage)
//!     .size(Size::Small) // kind-specific, after a shared call
//!     .add_topping(Topping::Onion)
//!     .build()?;
//!
//! assert_eq!(pizza.size(), Size::Small);
//! # Ok::<(), builder_api_design::BuildError>(())
//! ```
//!
//! A kind-specific mutator is not reachable from the wrong builder:
//!
//! ```compile_fail
//! use builder_api_design::pizza::{Calzone, PizzaBuilder, Size};
//!
//! let _ = Calzone::builder().size(Size::Large);
//! ```
//!
//! nor from code that only knows the base builder:
//!
//! ```compile_fail
//! use builder_api_design::pizza::{PizzaBuilder, Size};
//!
//! fn resize<B: PizzaBuilder>(builder: B) -> B {
//!     builder.size(Size::Small)
//! }
//! ```

mod calzone;
mod new_york;
mod tagged;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{BuildError, Result};

pub use calzone::{Calzone, CalzoneBuilder};
pub use new_york::{NyPizza, NyPizzaBuilder, Size};
pub use tagged::{AnyPizza, TaggedPizzaBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topping {
    Ham,
    Mushroom,
    Onion,
    Pepper,
    Sausage,
}

/// The pizza kinds this family knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    NewYork,
    Calzone,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::NewYork => f.write_str("new-york"),
            Kind::Calzone => f.write_str("calzone"),
        }
    }
}

/// Attributes every pizza carries, whatever its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaBase {
    toppings: Vec<Topping>,
}

impl PizzaBase {
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }
}

/// Read-only view of a built pizza. Only base attributes are visible here.
pub trait Pizza {
    fn base(&self) -> &PizzaBase;

    fn kind(&self) -> Kind;

    fn toppings(&self) -> &[Topping] {
        self.base().toppings()
    }
}

/// Scratch state for the shared block.
#[derive(Debug, Clone, Default)]
pub struct PizzaBaseBuilder {
    toppings: Vec<Topping>,
}

impl PizzaBaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // Insertion order is kept; a repeated topping is ignored.
    pub fn add(&mut self, topping: Topping) {
        if !self.toppings.contains(&topping) {
            self.toppings.push(topping);
        }
    }

    /// Validate the shared block. Called by every concrete `build`.
    pub fn finish(self) -> Result<PizzaBase> {
        if self.toppings.is_empty() {
            warn!("rejected pizza without toppings");
            return Err(BuildError::invalid("toppings", "at least one topping is required"));
        }
        Ok(PizzaBase {
            toppings: self.toppings,
        })
    }
}

/// Base builder for every pizza kind.
///
/// Implementors only expose their shared scratch state and their own `build`;
/// the shared mutators come for free and return the implementor's type.
pub trait PizzaBuilder: Sized {
    type Output: Pizza;

    fn base_mut(&mut self) -> &mut PizzaBaseBuilder;

    fn build(self) -> Result<Self::Output>;

    fn add_topping(mut self, topping: Topping) -> Self {
        self.base_mut().add(topping);
        self
    }

    fn add_toppings(mut self, toppings: impl IntoIterator<Item = Topping>) -> Self {
        for topping in toppings {
            self.base_mut().add(topping);
        }
        self
    }
}
