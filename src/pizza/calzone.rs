use serde::Serialize;
use tracing::debug;

use super::{Kind, Pizza, PizzaBase, PizzaBaseBuilder, PizzaBuilder};
use crate::error::Result;

/// Folded pizza: the shared toppings plus whether the sauce goes inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calzone {
    #[serde(flatten)]
    base: PizzaBase,
    sauce_inside: bool,
}

impl Calzone {
    pub fn builder() -> CalzoneBuilder {
        CalzoneBuilder::new()
    }

    pub fn sauce_inside(&self) -> bool {
        self.sauce_inside
    }
}

impl Pizza for Calzone {
    fn base(&self) -> &PizzaBase {
        &self.base
    }

    fn kind(&self) -> Kind {
        Kind::Calzone
    }
}

#[must_use = "a builder does nothing unless you call `.build()`"]
#[derive(Debug, Clone, Default)]
pub struct CalzoneBuilder {
    base: PizzaBaseBuilder,
    sauce_inside: bool,
}

impl CalzoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sauce_inside(mut self) -> Self {
        self.sauce_inside = true;
        self
    }
}

impl PizzaBuilder for CalzoneBuilder {
    type Output = Calzone;

    fn base_mut(&mut self) -> &mut PizzaBaseBuilder {
        &mut self.base
    }

    fn build(self) -> Result<Calzone> {
        let base = self.base.finish()?;

        debug!(sauce_inside = self.sauce_inside, toppings = ?base.toppings(), "built calzone");
        Ok(Calzone {
            base,
            sauce_inside: self.sauce_inside,
        })
    }
}
