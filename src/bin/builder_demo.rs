//! Builder walkthrough: flat labels, hierarchical pizzas, and menus from TOML.
//!
//! Run with: cargo run --bin builder_demo [-- menu.toml]

use builder_api_design::pizza::{Calzone, NyPizza, Size, TaggedPizzaBuilder, Topping};
use builder_api_design::{Kind, Menu, NutritionFacts, Pizza, PizzaBuilder};
use colored::Colorize;

fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = result {
        eprintln!("tracing already initialized: {err}");
    }
}

fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

fn describe(pizza: &dyn Pizza) -> String {
    format!("{} with {:?}", pizza.kind(), pizza.toppings())
}

fn main() {
    init_tracing();

    section("Flat Builder");
    // Required attributes go in the constructor; optional ones are chained.
    match NutritionFacts::builder(240, 8)
        .calories(100)
        .sodium(35)
        .carbohydrate(27)
        .build()
    {
        Ok(cola) => {
            println!("Cola: {cola}");
            println!("Calories per container: {}", cola.per_container());
        }
        Err(e) => println!("Error: {e}"),
    }

    section("Flat Builder: Validation");
    match NutritionFacts::builder(0, 8).build() {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("{} {e}", "Expected error:".yellow()),
    }

    section("Hierarchical Builder");
    // Shared and kind-specific calls interleave; build() returns the concrete type.
    let ny = NyPizza::builder()
        .add_topping(Topping::Sausage)
        .size(Size::Small)
        .add_topping(Topping::Onion)
        .build();
    let calzone = Calzone::builder()
        .add_topping(Topping::Ham)
        .sauce_inside()
        .build();

    match (ny, calzone) {
        (Ok(ny), Ok(calzone)) => {
            println!("{} (size {:?})", describe(&ny), ny.size());
            println!("{} (sauce inside: {})", describe(&calzone), calzone.sauce_inside());
        }
        (Err(e), _) | (_, Err(e)) => println!("Error: {e}"),
    }

    section("Hierarchical Builder: Missing Size");
    match NyPizza::builder().add_topping(Topping::Ham).build() {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("{} {e}", "Expected error:".yellow()),
    }

    section("Tagged Builder");
    let mut tagged = TaggedPizzaBuilder::new(Kind::Calzone);
    if let Err(e) = tagged.size(Size::Large) {
        println!("{} {e}", "Expected error:".yellow());
    }
    let built = tagged
        .add_topping(Topping::Mushroom)
        .and_then(|builder| builder.build());
    match built {
        Ok(pizza) => println!("Built: {}", describe(&pizza)),
        Err(e) => println!("Error: {e}"),
    }
    if let Err(e) = tagged.build() {
        println!("{} {e}", "Expected error:".yellow());
    }

    let Some(path) = std::env::args().nth(1) else {
        return;
    };

    section("Menu from TOML");
    match Menu::load(&path) {
        Ok(menu) => {
            for (name, label) in &menu.labels {
                match serde_json::to_string(label) {
                    Ok(json) => println!("label {name}: {json}"),
                    Err(e) => println!("label {name}: {e}"),
                }
            }
            for pizza in &menu.pizzas {
                match serde_json::to_string(pizza) {
                    Ok(json) => println!("pizza: {json}"),
                    Err(e) => println!("pizza: {e}"),
                }
            }
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red());
            std::process::exit(1);
        }
    }
}
