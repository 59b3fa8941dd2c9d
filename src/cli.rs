//! CLI: drive each pattern from the command line.
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::choice::{self, Choice};
use crate::demo::Section;
use crate::factory::{AttractionFactory, AttractionKind, NewYorkPizzaFactory, PizzaFactory};
use crate::menu::{Crust, Dessert, Drink, MainItem, MealBuilder, PizzaBuilder, Sauce, SideItem, Size, Topping};
use crate::singleton::WeatherStation;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// builder, factory and singleton pattern demonstrations
#[derive(Parser, Debug)]
#[command(name = "pattern-demos")]
pub struct CommandLineInterface {
    /// raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// assemble a meal with the meal builder
    Meal(MealArgs),
    /// assemble a custom pizza with the pizza builder
    Pizza(PizzaArgs),
    /// order a pizza through a pizza factory
    Order(OrderArgs),
    /// list attractions created by the attraction factory
    Attractions(AttractionArgs),
    /// read or update the shared weather report
    Weather(WeatherArgs),
    /// replay the scripted walkthroughs
    Demo(DemoArgs),
    /// list every choice set and its keys
    Choices,
}

#[derive(Args, Debug, Clone, Copy)]
struct OutputSettings {
    /// print JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct MealArgs {
    /// main item (burger, sandwich, salad)
    #[arg(long = "main")]
    main_item: Option<MainItem>,

    /// side dish; repeat for several, in order
    #[arg(long = "side")]
    sides: Vec<SideItem>,

    #[arg(long)]
    drink: Option<Drink>,

    #[arg(long)]
    dessert: Option<Dessert>,

    #[command(flatten)]
    output: OutputSettings,
}

#[derive(Args, Debug)]
struct PizzaArgs {
    #[arg(long)]
    size: Option<Size>,

    #[arg(long)]
    crust: Option<Crust>,

    #[arg(long)]
    sauce: Option<Sauce>,

    /// topping; repeat for several, in order
    #[arg(long = "topping")]
    toppings: Vec<Topping>,

    #[command(flatten)]
    output: OutputSettings,
}

#[derive(Args, Debug)]
struct OrderArgs {
    /// pizza name, e.g. margherita
    kind: String,

    /// which pizza factory takes the order
    #[arg(long, value_enum, default_value_t = Style::NewYork)]
    style: Style,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Style {
    NewYork,
}

#[derive(Args, Debug)]
struct AttractionArgs {
    /// attraction names; all attractions when omitted
    kinds: Vec<String>,

    #[command(flatten)]
    output: OutputSettings,
}

#[derive(Args, Debug)]
struct WeatherArgs {
    /// replace the report before printing it
    #[arg(long)]
    set: Option<String>,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// run a single section
    #[arg(long, value_enum)]
    only: Option<Section>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Meal(args) => {
                let mut builder = MealBuilder::new();
                if let Some(main_item) = args.main_item {
                    builder.set_main_item(main_item);
                }
                builder.add_side(args.sides.as_slice());
                if let Some(drink) = args.drink {
                    builder.set_drink(drink);
                }
                if let Some(dessert) = args.dessert {
                    builder.set_dessert(dessert);
                }
                let meal = builder.build();
                info!(sides = meal.sides().len(), "meal built");
                emit(args.output, &meal, || {
                    println!("{}", "Custom Meal:".bold());
                    println!("{meal}");
                })
            }
            Command::Pizza(args) => {
                let mut builder = PizzaBuilder::new();
                if let Some(size) = args.size {
                    builder.set_size(size);
                }
                if let Some(crust) = args.crust {
                    builder.set_crust(crust);
                }
                if let Some(sauce) = args.sauce {
                    builder.set_sauce(sauce);
                }
                builder.add_topping(args.toppings.as_slice());
                let pizza = builder.build();
                emit(args.output, &pizza, || println!("{pizza}"))
            }
            Command::Order(args) => {
                let factory = match args.style {
                    Style::NewYork => NewYorkPizzaFactory,
                };
                let order = factory.order_pizza(&args.kind).with_context(|| {
                    format!("menu: {}", NewYorkPizzaFactory::MENU.join(", "))
                })?;
                for step in &order.steps {
                    println!("{} {step}", "•".green());
                }
                Ok(())
            }
            Command::Attractions(args) => {
                let kinds = resolve_attractions(&args.kinds)?;
                let sheets = kinds.into_iter().map(AttractionFactory::sheet).collect::<Vec<_>>();
                emit(args.output, &sheets, || {
                    for sheet in &sheets {
                        println!("{} {}", sheet.name.bold(), format!("({})", sheet.requirement).dimmed());
                        for (key, note) in &sheet.notes {
                            println!("  {}: {note}", key.cyan());
                        }
                    }
                })
            }
            Command::Weather(args) => {
                let station = WeatherStation::instance();
                if let Some(report) = args.set.as_ref() {
                    station.set_weather(report.as_str());
                }
                println!("{}", station.weather());
                Ok(())
            }
            Command::Demo(args) => {
                let sections = match args.only {
                    Some(section) => vec![section],
                    None => Section::ALL.to_vec(),
                };
                for section in sections {
                    println!("{}", format!("== {} ==", section.title()).yellow().bold());
                    for line in section.run()? {
                        println!("{line}");
                    }
                }
                Ok(())
            }
            Command::Choices => {
                for line in choice_sets() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn emit<T: Serialize>(output: OutputSettings, value: &T, text: impl FnOnce()) -> Result<()> {
    if output.json {
        let src = serde_json::to_string_pretty(value).context("failed to serialize output")?;
        println!("{src}");
    } else {
        text();
    }
    Ok(())
}

fn resolve_attractions(names: &[String]) -> Result<Vec<AttractionKind>> {
    if names.is_empty() {
        return Ok(AttractionKind::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| {
            choice::parse::<AttractionKind>(name)
                .with_context(|| choice::describe::<AttractionKind>())
        })
        .collect()
}

fn choice_sets() -> Vec<String> {
    vec![
        choice::describe::<MainItem>(),
        choice::describe::<SideItem>(),
        choice::describe::<Drink>(),
        choice::describe::<Dessert>(),
        choice::describe::<Size>(),
        choice::describe::<Crust>(),
        choice::describe::<Sauce>(),
        choice::describe::<Topping>(),
        choice::describe::<AttractionKind>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_sides_in_order() {
        let cli = CommandLineInterface::try_parse_from([
            "pattern-demos", "meal", "--main", "burger",
            "--side", "fries", "--side", "ONION_RINGS", "--drink", "soda",
        ])
        .unwrap();
        match cli.cmd {
            Command::Meal(args) => {
                assert_eq!(args.main_item, Some(MainItem::Burger));
                assert_eq!(args.sides, vec![SideItem::Fries, SideItem::OnionRings]);
                assert_eq!(args.drink, Some(Drink::Soda));
                assert_eq!(args.dessert, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_choice() {
        let err = CommandLineInterface::try_parse_from(["pattern-demos", "meal", "--drink", "milkshake"])
            .unwrap_err();
        assert!(err.to_string().contains("unknown drink: 'milkshake'"));
    }

    #[test]
    fn verbosity_counts() {
        let cli = CommandLineInterface::try_parse_from(["pattern-demos", "-vv", "choices"]).unwrap();
        assert_eq!(cli.verbosity(), 2);
    }

    #[test]
    fn attractions_default_to_all() {
        assert_eq!(resolve_attractions(&[]).unwrap().len(), 3);
        let picked = resolve_attractions(&["waterslide".to_string()]).unwrap();
        assert_eq!(picked, vec![AttractionKind::Waterslide]);
        assert!(resolve_attractions(&["carousel".to_string()]).is_err());
    }

    #[test]
    fn choice_listing_covers_every_set() {
        let sets = choice_sets();
        assert_eq!(sets.len(), 9);
        assert!(sets.contains(&"side: fries, onion-rings, chips, side-salad".to_string()));
    }

    #[test]
    fn unknown_pizza_order_fails() {
        let cli = CommandLineInterface::try_parse_from(["pattern-demos", "order", "hawaiian"]).unwrap();
        let err = cli.run().unwrap_err();
        assert!(format!("{err:#}").contains("Sorry, we don't have this kind of pizza: hawaiian"));
    }
}
