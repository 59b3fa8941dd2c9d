//! Composite values assembled through the incremental builder.
pub mod meal;
pub mod pizza;

pub use meal::{Dessert, Drink, MainItem, Meal, MealBuilder, MealDirector, SideItem};
pub use pizza::{Crust, CustomPizza, PizzaBuilder, Sauce, Size, Topping};
