// Pattern 1: Creational Patterns - Builder
// Chained setters consume and return the builder; `build` yields the finished value.

use crate::config::DemoConfig;
use crate::error::PatternError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Hamburger {
    pub cheese: bool,
    pub pepperoni: bool,
    pub lettuce: bool,
    pub tomato: bool,
}

impl Hamburger {
    pub fn builder() -> HamburgerBuilder {
        HamburgerBuilder::new()
    }
}

#[derive(Debug, Default)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct HamburgerBuilder {
    burger: Hamburger,
}

impl HamburgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cheese(mut self) -> Self {
        self.burger.cheese = true;
        self
    }

    pub fn add_pepperoni(mut self) -> Self {
        self.burger.pepperoni = true;
        self
    }

    pub fn add_lettuce(mut self) -> Self {
        self.burger.lettuce = true;
        self
    }

    pub fn add_tomato(mut self) -> Self {
        self.burger.tomato = true;
        self
    }

    pub fn build(self) -> Hamburger {
        self.burger
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let hamburger = Hamburger::builder()
        .add_cheese()
        .add_lettuce()
        .add_tomato()
        .build();

    match serde_json::to_string_pretty(&hamburger) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::warn!(%err, "could not serialize hamburger");
            println!("{hamburger:?}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_toppings_only() {
        let burger = Hamburger::builder()
            .add_cheese()
            .add_lettuce()
            .add_tomato()
            .build();

        assert!(burger.cheese);
        assert!(!burger.pepperoni);
        assert!(burger.lettuce);
        assert!(burger.tomato);
    }

    #[test]
    fn test_plain_burger() {
        assert_eq!(HamburgerBuilder::new().build(), Hamburger::default());
    }

    #[test]
    fn test_serializes_flags() {
        let burger = Hamburger::builder().add_pepperoni().build();
        let value = serde_json::to_value(burger).unwrap();
        assert_eq!(value["pepperoni"], true);
        assert_eq!(value["cheese"], false);
    }
}
