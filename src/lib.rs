//! # Builder & API Design Patterns
//!
//! Construction of immutable records without telescoping constructors.
//!
//! ## Patterns Covered
//!
//! 1. **Flat Builder** ([`nutrition`])
//!    - Required attributes as constructor arguments
//!    - Optional attributes with documented defaults
//!    - Consuming `build()` with validation
//!
//! 2. **Hierarchical Builder** ([`pizza`])
//!    - A base builder trait whose mutators return `Self`
//!    - One concrete builder per kind, each building its own record type
//!    - Runtime-tagged fallback when the kind is only known from data
//!
//! 3. **Declarative construction** ([`config`])
//!    - TOML menus routed through the builders
//!
//! ## Running the demo
//!
//! ```bash
//! cargo run --bin builder_demo
//! cargo run --bin builder_demo -- demos/menu.toml
//! RUST_LOG=builder_api_design=debug cargo run --bin builder_demo
//! ```

pub mod attribute;
pub mod config;
pub mod error;
pub mod nutrition;
pub mod pizza;

pub use attribute::{Attribute, AttributeSet, Requirement};
pub use config::{ConfigError, Menu};
pub use error::{BuildError, Result};
pub use nutrition::{NutritionFacts, NutritionFactsBuilder};
pub use pizza::{AnyPizza, Kind, Pizza, PizzaBuilder};
