//! Scripted walkthroughs of each pattern. Each returns the lines it would
//! print, so the CLI and the dev test runner share one source of truth.
use crate::error::Result;
use crate::factory::{AttractionFactory, AttractionKind, NewYorkPizzaFactory, PizzaFactory};
use crate::menu::{Crust, Dessert, Drink, MainItem, MealBuilder, MealDirector, PizzaBuilder, Sauce, SideItem, Size, Topping};
use crate::singleton::WeatherStation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    Builder,
    Factory,
    Singleton,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Builder, Section::Factory, Section::Singleton];

    pub fn title(self) -> &'static str {
        match self {
            Section::Builder => "Builder",
            Section::Factory => "Factory",
            Section::Singleton => "Singleton",
        }
    }

    pub fn run(self) -> Result<Vec<String>> {
        match self {
            Section::Builder => Ok(builder()),
            Section::Factory => factory(),
            Section::Singleton => Ok(singleton()),
        }
    }
}

pub fn builder() -> Vec<String> {
    let mut out = Vec::new();

    let mut meals = MealBuilder::new();
    let custom_meal = meals
        .set_main_item(MainItem::Sandwich)
        .add_side([SideItem::OnionRings, SideItem::SideSalad])
        .set_drink(Drink::Juice)
        .set_dessert(Dessert::Cookies)
        .build();
    out.push("Custom Meal:".to_string());
    out.extend(custom_meal.to_string().lines().map(str::to_string));

    let leftover = meals.build();
    out.push(format!("Next meal starts empty: {}", leftover.is_empty()));

    let combo = MealDirector::combo(&mut meals, MainItem::Burger);
    out.push("Burger Combo:".to_string());
    out.extend(combo.to_string().lines().map(str::to_string));

    let pizza = PizzaBuilder::new()
        .set_size(Size::Large)
        .set_crust(Crust::Thin)
        .set_sauce(Sauce::Tomato)
        .add_topping([Topping::Jalapeno, Topping::Olives])
        .build();
    out.push(pizza.to_string());

    out
}

pub fn factory() -> Result<Vec<String>> {
    let mut out = Vec::new();

    let order = NewYorkPizzaFactory.order_pizza("margherita")?;
    out.extend(order.steps);

    for kind in [AttractionKind::Rollercoaster, AttractionKind::Hauntedhouse, AttractionKind::Waterslide] {
        let ride = AttractionFactory::create(kind);
        out.push(format!("{}: {}", ride.name(), ride.requirement()));
    }

    Ok(out)
}

pub fn singleton() -> Vec<String> {
    let system1 = WeatherStation::instance();
    let before = system1.weather();

    system1.set_weather("Cloudy, 18C");

    let system2 = WeatherStation::instance();
    vec![
        before,
        system2.weather(),
        format!("same instance: {}", system1.identity() == system2.identity()),
    ]
}

/// Every section, each introduced by a `== Title ==` heading.
pub fn all() -> Result<Vec<String>> {
    let mut out = Vec::new();
    for section in Section::ALL {
        out.push(format!("== {} ==", section.title()));
        out.extend(section.run()?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_walkthrough() {
        assert_eq!(
            builder(),
            vec![
                "Custom Meal:",
                "Main Item: Sandwich",
                "Sides: [Onion Rings, Side Salad]",
                "Drink: Juice",
                "Dessert: Cookies",
                "Next meal starts empty: true",
                "Burger Combo:",
                "Main Item: Burger",
                "Sides: [Fries]",
                "Drink: Soda",
                "Dessert: No Dessert",
                "Pizza(size=Large, crust=Thin, sauce=Tomato, toppings=[Jalapeno, Olives])",
            ]
        );
    }

    #[test]
    fn factory_walkthrough() {
        let lines = factory().unwrap();
        assert_eq!(lines[0], "Preparing margherita pizza");
        assert_eq!(lines[3], "Boxing margherita pizza");
        assert_eq!(&lines[4..], &["Roller Coaster: 20", "Haunted House: 50", "Water Slide: 75"]);
    }

    #[test]
    fn singleton_walkthrough_shares_state() {
        let lines = singleton();
        // the first line depends on whether another test touched the station first
        assert_eq!(&lines[1..], &["Cloudy, 18C", "same instance: true"]);
    }

    #[test]
    fn all_sections_have_headings() {
        let lines = all().unwrap();
        let headings = lines.iter().filter(|l| l.starts_with("== ")).count();
        assert_eq!(headings, 3);
        assert_eq!(lines[0], "== Builder ==");
    }
}
