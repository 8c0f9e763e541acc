//! Runtime-selected pizza construction, for callers that learn the kind from
//! data (a config file, a request) rather than from the type system.
//!
//! Here the compile-time guarantees of the concrete builders become runtime
//! checks: kind-specific calls on the wrong kind return
//! [`BuildError::TypeMismatch`], and any call after `build` returns
//! [`BuildError::UseAfterBuild`].

use serde::Serialize;
use tracing::trace;

use super::{Calzone, CalzoneBuilder, Kind, NyPizza, NyPizzaBuilder, Pizza, PizzaBase};
use super::{PizzaBuilder, Size, Topping};
use crate::error::{BuildError, Result};

/// A built pizza of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnyPizza {
    NewYork(NyPizza),
    Calzone(Calzone),
}

impl AnyPizza {
    pub fn into_new_york(self) -> Result<NyPizza> {
        match self {
            AnyPizza::NewYork(pizza) => Ok(pizza),
            other => Err(BuildError::mismatch("into_new_york", Kind::NewYork, other.kind())),
        }
    }

    pub fn into_calzone(self) -> Result<Calzone> {
        match self {
            AnyPizza::Calzone(pizza) => Ok(pizza),
            other => Err(BuildError::mismatch("into_calzone", Kind::Calzone, other.kind())),
        }
    }
}

impl Pizza for AnyPizza {
    fn base(&self) -> &PizzaBase {
        match self {
            AnyPizza::NewYork(pizza) => pizza.base(),
            AnyPizza::Calzone(pizza) => pizza.base(),
        }
    }

    fn kind(&self) -> Kind {
        match self {
            AnyPizza::NewYork(_) => Kind::NewYork,
            AnyPizza::Calzone(_) => Kind::Calzone,
        }
    }
}

impl From<NyPizza> for AnyPizza {
    fn from(pizza: NyPizza) -> Self {
        AnyPizza::NewYork(pizza)
    }
}

impl From<Calzone> for AnyPizza {
    fn from(pizza: Calzone) -> Self {
        AnyPizza::Calzone(pizza)
    }
}

#[derive(Debug)]
enum State {
    NewYork(NyPizzaBuilder),
    Calzone(CalzoneBuilder),
    Built,
}

/// Non-consuming builder whose kind is chosen at runtime.
///
/// Mutators take `&mut self` and return `Result<&mut Self>` so calls chain
/// with `?`.
#[derive(Debug)]
pub struct TaggedPizzaBuilder {
    kind: Kind,
    state: State,
}

impl TaggedPizzaBuilder {
    const NAME: &'static str = "TaggedPizzaBuilder";

    pub fn new(kind: Kind) -> Self {
        let state = match kind {
            Kind::NewYork => State::NewYork(NyPizzaBuilder::new()),
            Kind::Calzone => State::Calzone(CalzoneBuilder::new()),
        };
        TaggedPizzaBuilder { kind, state }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, State::Built)
    }

    pub fn add_topping(&mut self, topping: Topping) -> Result<&mut Self> {
        trace!(kind = %self.kind, ?topping, "add_topping");
        match &mut self.state {
            State::NewYork(builder) => builder.base_mut().add(topping),
            State::Calzone(builder) => builder.base_mut().add(topping),
            State::Built => return Err(Self::spent()),
        }
        Ok(self)
    }

    pub fn size(&mut self, size: Size) -> Result<&mut Self> {
        trace!(kind = %self.kind, ?size, "size");
        match &mut self.state {
            State::NewYork(builder) => *builder = std::mem::take(builder).size(size),
            State::Calzone(_) => {
                return Err(BuildError::mismatch("size", Kind::NewYork, Kind::Calzone))
            }
            State::Built => return Err(Self::spent()),
        }
        Ok(self)
    }

    pub fn sauce_inside(&mut self) -> Result<&mut Self> {
        trace!(kind = %self.kind, "sauce_inside");
        match &mut self.state {
            State::Calzone(builder) => *builder = std::mem::take(builder).sauce_inside(),
            State::NewYork(_) => {
                return Err(BuildError::mismatch(
                    "sauce_inside",
                    Kind::Calzone,
                    Kind::NewYork,
                ))
            }
            State::Built => return Err(Self::spent()),
        }
        Ok(self)
    }

    /// Produce the pizza. The builder is spent afterwards, even on failure.
    pub fn build(&mut self) -> Result<AnyPizza> {
        match std::mem::replace(&mut self.state, State::Built) {
            State::NewYork(builder) => builder.build().map(AnyPizza::from),
            State::Calzone(builder) => builder.build().map(AnyPizza::from),
            State::Built => Err(Self::spent()),
        }
    }

    fn spent() -> BuildError {
        BuildError::UseAfterBuild {
            builder: Self::NAME,
        }
    }
}
