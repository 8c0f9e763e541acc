use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Kind, Pizza, PizzaBase, PizzaBaseBuilder, PizzaBuilder};
use crate::error::{BuildError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// New York style pizza: the shared toppings plus a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NyPizza {
    #[serde(flatten)]
    base: PizzaBase,
    size: Size,
}

impl NyPizza {
    pub fn builder() -> NyPizzaBuilder {
        NyPizzaBuilder::new()
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Pizza for NyPizza {
    fn base(&self) -> &PizzaBase {
        &self.base
    }

    fn kind(&self) -> Kind {
        Kind::NewYork
    }
}

#[must_use = "a builder does nothing unless you call `.build()`"]
#[derive(Debug, Clone, Default)]
pub struct NyPizzaBuilder {
    base: PizzaBaseBuilder,
    size: Option<Size>,
}

impl NyPizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

impl PizzaBuilder for NyPizzaBuilder {
    type Output = NyPizza;

    fn base_mut(&mut self) -> &mut PizzaBaseBuilder {
        &mut self.base
    }

    fn build(self) -> Result<NyPizza> {
        // No default size: an unset size is an error, never a silent Medium.
        let Some(size) = self.size else {
            warn!("rejected new-york pizza without a size");
            return Err(BuildError::missing("size"));
        };
        let base = self.base.finish()?;

        debug!(?size, toppings = ?base.toppings(), "built new-york pizza");
        Ok(NyPizza { base, size })
    }
}
