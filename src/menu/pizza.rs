use std::fmt;

use serde::Serialize;

use crate::builder::{Builder, Items, ListSlot, Slot};
use crate::choice::{choice, list_labels};

choice! {
    pub enum Size as "size" {
        Small => ("small", "Small"),
        Medium => ("medium", "Medium"),
        Large => ("large", "Large"),
    }
}

choice! {
    pub enum Crust as "crust" {
        Thin => ("thin", "Thin"),
        Thick => ("thick", "Thick"),
    }
}

choice! {
    pub enum Sauce as "sauce" {
        Tomato => ("tomato", "Tomato"),
        Bbq => ("bbq", "BBQ"),
    }
}

choice! {
    pub enum Topping as "topping" {
        Jalapeno => ("jalapeno", "Jalapeno"),
        Olives => ("olives", "Olives"),
        Pineapple => ("pineapple", "Pineapple"),
        Mushrooms => ("mushrooms", "Mushrooms"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomPizza {
    size: Option<Size>,
    crust: Option<Crust>,
    sauce: Option<Sauce>,
    toppings: Vec<Topping>,
}

impl CustomPizza {
    pub const SIZE: Slot<CustomPizza, Size> = Slot::new("size", |p| &mut p.size);
    pub const CRUST: Slot<CustomPizza, Crust> = Slot::new("crust", |p| &mut p.crust);
    pub const SAUCE: Slot<CustomPizza, Sauce> = Slot::new("sauce", |p| &mut p.sauce);
    pub const TOPPINGS: ListSlot<CustomPizza, Topping> = ListSlot::new("toppings", |p| &mut p.toppings);

    pub fn size(&self) -> Option<Size> { self.size }
    pub fn crust(&self) -> Option<Crust> { self.crust }
    pub fn sauce(&self) -> Option<Sauce> { self.sauce }
    pub fn toppings(&self) -> &[Topping] { &self.toppings }
}

impl fmt::Display for CustomPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pizza(size={}, crust={}, sauce={}, toppings={})",
            or_none(self.size),
            or_none(self.crust),
            or_none(self.sauce),
            list_labels(&self.toppings),
        )
    }
}

#[derive(Debug, Default)]
pub struct PizzaBuilder {
    inner: Builder<CustomPizza>,
}

impl PizzaBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.inner.set(CustomPizza::SIZE, size);
        self
    }

    pub fn set_crust(&mut self, crust: Crust) -> &mut Self {
        self.inner.set(CustomPizza::CRUST, crust);
        self
    }

    pub fn set_sauce(&mut self, sauce: Sauce) -> &mut Self {
        self.inner.set(CustomPizza::SAUCE, sauce);
        self
    }

    pub fn add_topping(&mut self, topping: impl Into<Items<Topping>>) -> &mut Self {
        self.inner.add(CustomPizza::TOPPINGS, topping);
        self
    }

    pub fn build(&mut self) -> CustomPizza { self.inner.finalize() }
}

fn or_none<T: fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}
