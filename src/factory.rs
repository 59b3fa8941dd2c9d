//! Discriminator → trait object lookups. The two factories are unrelated.
pub mod attraction;
pub mod pizza;

pub use attraction::{Attraction, AttractionFactory, AttractionKind};
pub use pizza::{NewYorkPizzaFactory, Pizza, PizzaFactory, PizzaOrder};
