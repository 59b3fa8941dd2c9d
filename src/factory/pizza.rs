use tracing::{debug, warn};

use crate::error::{Error, Result};

/// The steps every pizza goes through. Each step returns its console line.
pub trait Pizza: std::fmt::Debug {
    fn name(&self) -> &'static str;

    fn prepare(&self) -> String { format!("Preparing {} pizza", self.name()) }
    fn bake(&self) -> String { format!("Baking {} pizza", self.name()) }
    fn cut(&self) -> String { format!("Cutting {} pizza", self.name()) }
    fn box_up(&self) -> String { format!("Boxing {} pizza", self.name()) }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MargheritaPizza;

#[derive(Debug, Clone, Copy, Default)]
pub struct PepperoniPizza;

impl Pizza for MargheritaPizza {
    fn name(&self) -> &'static str { "margherita" }
}

impl Pizza for PepperoniPizza {
    fn name(&self) -> &'static str { "pepperoni" }
}

/// A built pizza plus the step lines produced while ordering it.
#[derive(Debug)]
pub struct PizzaOrder {
    pub pizza: Box<dyn Pizza>,
    pub steps: Vec<String>,
}

pub trait PizzaFactory {
    /// Map a menu name onto a concrete pizza.
    fn build(&self, kind: &str) -> Result<Box<dyn Pizza>>;

    /// Build, then prepare → bake → cut → box.
    fn order_pizza(&self, kind: &str) -> Result<PizzaOrder> {
        let pizza = self.build(kind)?;
        let steps = vec![pizza.prepare(), pizza.bake(), pizza.cut(), pizza.box_up()];
        debug!(pizza = pizza.name(), "order complete");
        Ok(PizzaOrder { pizza, steps })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NewYorkPizzaFactory;

impl NewYorkPizzaFactory {
    pub const MENU: &'static [&'static str] = &["margherita", "pepperoni"];
}

impl PizzaFactory for NewYorkPizzaFactory {
    fn build(&self, kind: &str) -> Result<Box<dyn Pizza>> {
        match kind {
            "margherita" => Ok(Box::new(MargheritaPizza)),
            "pepperoni" => Ok(Box::new(PepperoniPizza)),
            other => {
                warn!(kind = other, "unsupported pizza");
                Err(Error::UnsupportedPizza(other.to_string()))
            }
        }
    }
}
