pub mod builder;
pub mod choice;
pub mod cli;
pub mod demo;
pub mod error;
pub mod factory;
pub mod logging;
pub mod menu;
pub mod singleton;

pub use error::{Error, Result};
