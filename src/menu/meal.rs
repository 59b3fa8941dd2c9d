use std::fmt;

use serde::Serialize;

use crate::builder::{Builder, Items, ListSlot, Slot};
use crate::choice::{choice, list_labels};

choice! {
    pub enum MainItem as "main item" {
        Burger => ("burger", "Burger"),
        Sandwich => ("sandwich", "Sandwich"),
        Salad => ("salad", "Salad"),
    }
}

choice! {
    pub enum SideItem as "side" {
        Fries => ("fries", "Fries"),
        OnionRings => ("onion-rings", "Onion Rings"),
        Chips => ("chips", "Chips"),
        SideSalad => ("side-salad", "Side Salad"),
    }
}

choice! {
    pub enum Drink as "drink" {
        Soda => ("soda", "Soda"),
        Juice => ("juice", "Juice"),
        Water => ("water", "Water"),
    }
}

choice! {
    pub enum Dessert as "dessert" {
        IceCream => ("ice-cream", "Ice Cream"),
        Pie => ("pie", "Pie"),
        Cookies => ("cookies", "Cookies"),
    }
}

/// A (possibly partial) meal order. Only [`MealBuilder`] can fill it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meal {
    main_item: Option<MainItem>,
    sides: Vec<SideItem>,
    drink: Option<Drink>,
    dessert: Option<Dessert>,
}

impl Meal {
    pub const MAIN_ITEM: Slot<Meal, MainItem> = Slot::new("main_item", |m| &mut m.main_item);
    pub const SIDES: ListSlot<Meal, SideItem> = ListSlot::new("sides", |m| &mut m.sides);
    pub const DRINK: Slot<Meal, Drink> = Slot::new("drink", |m| &mut m.drink);
    pub const DESSERT: Slot<Meal, Dessert> = Slot::new("dessert", |m| &mut m.dessert);

    pub fn main_item(&self) -> Option<MainItem> { self.main_item }
    pub fn sides(&self) -> &[SideItem] { &self.sides }
    pub fn drink(&self) -> Option<Drink> { self.drink }
    pub fn dessert(&self) -> Option<Dessert> { self.dessert }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Main Item: {}", label_or(self.main_item, "None"))?;
        writeln!(f, "Sides: {}", list_labels(&self.sides))?;
        writeln!(f, "Drink: {}", label_or(self.drink, "None"))?;
        write!(f, "Dessert: {}", label_or(self.dessert, "No Dessert"))
    }
}

/// Meal-shaped facade over [`Builder<Meal>`].
#[derive(Debug, Default)]
pub struct MealBuilder {
    inner: Builder<Meal>,
}

impl MealBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn set_main_item(&mut self, item: MainItem) -> &mut Self {
        self.inner.set(Meal::MAIN_ITEM, item);
        self
    }

    /// Accepts a single side or a sequence of sides.
    pub fn add_side(&mut self, side: impl Into<Items<SideItem>>) -> &mut Self {
        self.inner.add(Meal::SIDES, side);
        self
    }

    pub fn set_drink(&mut self, drink: Drink) -> &mut Self {
        self.inner.set(Meal::DRINK, drink);
        self
    }

    pub fn set_dessert(&mut self, dessert: Dessert) -> &mut Self {
        self.inner.set(Meal::DESSERT, dessert);
        self
    }

    /// Emit the current meal and start a fresh one.
    pub fn build(&mut self) -> Meal { self.inner.finalize() }
}

/// Fixed recipes driven through a [`MealBuilder`].
///
/// The director only decides the order and content of the calls; the builder
/// it is handed keeps working normally afterwards.
pub struct MealDirector;

impl MealDirector {
    /// `main` with fries and a soda.
    pub fn combo(builder: &mut MealBuilder, main: MainItem) -> Meal {
        builder
            .set_main_item(main)
            .add_side(SideItem::Fries)
            .set_drink(Drink::Soda)
            .build()
    }

    /// Burger, fries, juice and ice cream.
    pub fn kids_meal(builder: &mut MealBuilder) -> Meal {
        builder
            .set_main_item(MainItem::Burger)
            .add_side(SideItem::Fries)
            .set_drink(Drink::Juice)
            .set_dessert(Dessert::IceCream)
            .build()
    }
}

fn label_or<T: fmt::Display>(value: Option<T>, fallback: &str) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn burger_combo_then_empty_meal() {
        let mut builder = MealBuilder::new();
        let meal = builder
            .set_main_item(MainItem::Burger)
            .add_side(SideItem::Fries)
            .add_side([SideItem::OnionRings])
            .set_drink(Drink::Soda)
            .build();

        assert_eq!(meal.main_item(), Some(MainItem::Burger));
        assert_eq!(meal.sides(), &[SideItem::Fries, SideItem::OnionRings]);
        assert_eq!(meal.drink(), Some(Drink::Soda));
        assert_eq!(meal.dessert(), None);

        let next = builder.build();
        assert!(next.is_empty());
        assert_eq!(next.main_item(), None);
        assert!(next.sides().is_empty());
    }

    #[test]
    fn sides_mix_single_and_many_in_order() {
        let meal = MealBuilder::new()
            .add_side(SideItem::Chips)
            .add_side(vec![SideItem::Fries, SideItem::SideSalad])
            .add_side(SideItem::OnionRings)
            .build();
        assert_eq!(
            meal.sides(),
            &[SideItem::Chips, SideItem::Fries, SideItem::SideSalad, SideItem::OnionRings]
        );
    }

    #[test]
    fn repeated_setters_keep_last() {
        let meal = MealBuilder::new()
            .set_drink(Drink::Water)
            .set_drink(Drink::Juice)
            .set_main_item(MainItem::Salad)
            .set_main_item(MainItem::Sandwich)
            .build();
        assert_eq!(meal.drink(), Some(Drink::Juice));
        assert_eq!(meal.main_item(), Some(MainItem::Sandwich));
    }

    #[test]
    fn json_uses_choice_names_and_nulls() {
        let meal = MealBuilder::new()
            .set_main_item(MainItem::Sandwich)
            .add_side([SideItem::OnionRings, SideItem::SideSalad])
            .set_dessert(Dessert::IceCream)
            .build();
        assert_eq!(
            serde_json::to_value(&meal).unwrap(),
            json!({
                "main_item": "SANDWICH",
                "sides": ["ONION_RINGS", "SIDE_SALAD"],
                "drink": null,
                "dessert": "ICE_CREAM",
            })
        );
    }

    #[test]
    fn director_runs_fixed_recipes() {
        let mut builder = MealBuilder::new();
        let combo = MealDirector::combo(&mut builder, MainItem::Salad);
        assert_eq!(combo.main_item(), Some(MainItem::Salad));
        assert_eq!(combo.sides(), &[SideItem::Fries]);
        assert_eq!(combo.drink(), Some(Drink::Soda));
        assert_eq!(combo.dessert(), None);

        let kids = MealDirector::kids_meal(&mut builder);
        assert_eq!(kids.sides(), &[SideItem::Fries]);
        assert_eq!(kids.dessert(), Some(Dessert::IceCream));
        assert!(builder.build().is_empty());
    }

    #[test]
    fn director_extends_partial_builder_state() {
        let mut builder = MealBuilder::new();
        builder.add_side(SideItem::Chips);
        let combo = MealDirector::combo(&mut builder, MainItem::Burger);
        assert_eq!(combo.sides(), &[SideItem::Chips, SideItem::Fries]);
    }

    #[test]
    fn display_falls_back_for_missing_fields() {
        let meal = MealBuilder::new().set_main_item(MainItem::Burger).build();
        assert_eq!(
            meal.to_string(),
            "Main Item: Burger\nSides: []\nDrink: None\nDessert: No Dessert"
        );
    }
}
