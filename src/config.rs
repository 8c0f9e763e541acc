//! Declarative construction: a TOML menu of nutrition labels and pizzas.
//!
//! Entries are deserialized into raw, all-optional structs and then pushed
//! through the builders, so defaults and validation stay in one place.
//!
//! ```toml
//! [[label]]
//! name = "cola"
//! serving_size = 240
//! servings = 8
//! calories = 100
//!
//! [[pizza]]
//! kind = "new-york"
//! size = "small"
//! toppings = ["sausage", "onion"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::error::BuildError;
use crate::nutrition::NutritionFacts;
use crate::pizza::{AnyPizza, Kind, Size, TaggedPizzaBuilder, Topping};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{entry}: {source}")]
    Build {
        entry: String,
        #[source]
        source: BuildError,
    },
}

impl ConfigError {
    fn build(entry: impl Into<String>, source: BuildError) -> Self {
        ConfigError::Build {
            entry: entry.into(),
            source,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMenu {
    #[serde(default, rename = "label")]
    labels: Vec<RawLabel>,
    #[serde(default, rename = "pizza")]
    pizzas: Vec<RawPizza>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLabel {
    name: String,
    serving_size: Option<u32>,
    servings: Option<u32>,
    calories: Option<u32>,
    fat: Option<u32>,
    sodium: Option<u32>,
    carbohydrate: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPizza {
    kind: Kind,
    #[serde(default)]
    toppings: Vec<Topping>,
    size: Option<Size>,
    sauce_inside: Option<bool>,
}

impl RawLabel {
    fn build(self) -> Result<(String, NutritionFacts), BuildError> {
        let serving_size = self
            .serving_size
            .ok_or_else(|| BuildError::missing("serving_size"))?;
        let servings = self.servings.ok_or_else(|| BuildError::missing("servings"))?;

        let mut builder = NutritionFacts::builder(serving_size, servings);
        if let Some(calories) = self.calories {
            builder = builder.calories(calories);
        }
        if let Some(fat) = self.fat {
            builder = builder.fat(fat);
        }
        if let Some(sodium) = self.sodium {
            builder = builder.sodium(sodium);
        }
        if let Some(carbohydrate) = self.carbohydrate {
            builder = builder.carbohydrate(carbohydrate);
        }
        Ok((self.name, builder.build()?))
    }
}

impl RawPizza {
    fn build(self) -> Result<AnyPizza, BuildError> {
        let mut builder = TaggedPizzaBuilder::new(self.kind);
        for topping in self.toppings {
            builder.add_topping(topping)?;
        }
        if let Some(size) = self.size {
            builder.size(size)?;
        }
        // `sauce_inside = false` is the default and valid for any kind.
        if self.sauce_inside == Some(true) {
            builder.sauce_inside()?;
        }
        builder.build()
    }
}

/// Everything a menu file describes, fully built.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub labels: Vec<(String, NutritionFacts)>,
    pub pizzas: Vec<AnyPizza>,
}

impl Menu {
    pub fn from_toml_str(content: &str) -> Result<Menu, ConfigError> {
        let raw: RawMenu = toml::from_str(content)?;

        let labels = raw
            .labels
            .into_iter()
            .map(|label| {
                let entry = format!("label \"{}\"", label.name);
                label.build().map_err(|err| ConfigError::build(entry, err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let pizzas = raw
            .pizzas
            .into_iter()
            .enumerate()
            .map(|(index, pizza)| {
                pizza
                    .build()
                    .map_err(|err| ConfigError::build(format!("pizza #{}", index + 1), err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(labels = labels.len(), pizzas = pizzas.len(), "menu built");
        Ok(Menu { labels, pizzas })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Menu, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading menu");
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza::Pizza;
    use std::io::Write;

    const MENU: &str = r#"
[[label]]
name = "cola"
serving_size = 240
servings = 8
calories = 100
sodium = 35

[[pizza]]
kind = "new-york"
size = "small"
toppings = ["sausage", "onion"]

[[pizza]]
kind = "calzone"
sauce_inside = true
toppings = ["ham"]
"#;

    #[test]
    fn test_full_menu() {
        let menu = Menu::from_toml_str(MENU).unwrap();

        let (name, cola) = &menu.labels[0];
        assert_eq!(name, "cola");
        assert_eq!(cola.calories(), 100);
        assert_eq!(cola.fat(), 0);

        assert_eq!(menu.pizzas.len(), 2);
        let ny = menu.pizzas[0].clone().into_new_york().unwrap();
        assert_eq!(ny.size(), Size::Small);
        assert_eq!(ny.toppings(), &[Topping::Sausage, Topping::Onion]);
        let calzone = menu.pizzas[1].clone().into_calzone().unwrap();
        assert!(calzone.sauce_inside());
    }

    #[test]
    fn test_empty_menu() {
        let menu = Menu::from_toml_str("").unwrap();
        assert!(menu.labels.is_empty());
        assert!(menu.pizzas.is_empty());
    }

    #[test]
    fn test_missing_size_reports_entry() {
        let err = Menu::from_toml_str(
            r#"
[[pizza]]
kind = "new-york"
toppings = ["ham"]
"#,
        )
        .unwrap_err();

        match err {
            ConfigError::Build { entry, source } => {
                assert_eq!(entry, "pizza #1");
                assert_eq!(source, BuildError::missing("size"));
            }
            other => panic!("expected build error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_label_field() {
        let err = Menu::from_toml_str(
            r#"
[[label]]
name = "water"
servings = 1
"#,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "label \"water\": invalid serving_size: is required but was never set"
        );
    }

    #[test]
    fn test_size_on_calzone_is_mismatch() {
        let err = Menu::from_toml_str(
            r#"
[[pizza]]
kind = "calzone"
size = "large"
toppings = ["onion"]
"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Build {
                source: BuildError::TypeMismatch { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_topping_is_parse_error() {
        let err = Menu::from_toml_str(
            r#"
[[pizza]]
kind = "calzone"
toppings = ["pineapple"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MENU.as_bytes()).unwrap();

        let menu = Menu::load(file.path()).unwrap();
        assert_eq!(menu.labels.len(), 1);
        assert_eq!(menu.pizzas.len(), 2);
    }

    #[test]
    fn test_demo_menu_loads() {
        let menu = Menu::load(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/menu.toml")).unwrap();
        assert_eq!(menu.labels.len(), 2);
        assert_eq!(menu.labels[1].1.calories(), 0);
        assert_eq!(menu.pizzas[1].kind(), Kind::Calzone);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Menu::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
