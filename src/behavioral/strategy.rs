// Pattern 3: Behavioral Patterns - Strategy
// The cart delegates discount calculation to whichever strategy it was given.

use crate::config::DemoConfig;
use crate::error::PatternError;

pub trait DiscountStrategy {
    /// Amount taken off `order_total`.
    fn calculate_discount(&self, order_total: f64) -> f64;

    fn name(&self) -> &str {
        "custom"
    }
}

pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn calculate_discount(&self, _order_total: f64) -> f64 {
        0.0
    }

    fn name(&self) -> &str {
        "no discount"
    }
}

pub struct TenPercentDiscount;

impl DiscountStrategy for TenPercentDiscount {
    fn calculate_discount(&self, order_total: f64) -> f64 {
        order_total * 0.1
    }

    fn name(&self) -> &str {
        "10% off"
    }
}

pub struct FiftyPercentDiscount;

impl DiscountStrategy for FiftyPercentDiscount {
    fn calculate_discount(&self, order_total: f64) -> f64 {
        order_total * 0.5
    }

    fn name(&self) -> &str {
        "50% off"
    }
}

// Closures work as strategies too
impl<F> DiscountStrategy for F
where
    F: Fn(f64) -> f64,
{
    fn calculate_discount(&self, order_total: f64) -> f64 {
        self(order_total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub price: f64,
}

impl Item {
    pub fn new(price: f64) -> Self {
        Self { price }
    }
}

pub struct ShoppingCart {
    strategy: Box<dyn DiscountStrategy>,
    items: Vec<Item>,
}

impl ShoppingCart {
    pub fn new(strategy: Box<dyn DiscountStrategy>) -> Self {
        Self {
            strategy,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn DiscountStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn calculate_total(&self) -> f64 {
        let subtotal = self.subtotal();
        let discount = self.strategy.calculate_discount(subtotal);
        tracing::debug!(strategy = self.strategy_name(), subtotal, discount, "cart total");
        subtotal - discount
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let mut order1 = ShoppingCart::new(Box::new(NoDiscount));
    order1.add_item(Item::new(100.0));
    order1.add_item(Item::new(200.0));
    println!("{:.2}", order1.calculate_total());

    let mut order2 = ShoppingCart::new(Box::new(TenPercentDiscount));
    order2.add_item(Item::new(100.0));
    order2.add_item(Item::new(200.0));
    println!("{:.2}", order2.calculate_total());

    order2.set_strategy(Box::new(FiftyPercentDiscount));
    println!("Switched to {}: {:.2}", order2.strategy_name(), order2.calculate_total());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart(strategy: Box<dyn DiscountStrategy>) -> ShoppingCart {
        let mut cart = ShoppingCart::new(strategy);
        cart.add_item(Item::new(100.0));
        cart.add_item(Item::new(200.0));
        cart
    }

    #[test]
    fn test_no_discount() {
        assert_eq!(cart(Box::new(NoDiscount)).calculate_total(), 300.0);
    }

    #[test]
    fn test_ten_percent() {
        let total = cart(Box::new(TenPercentDiscount)).calculate_total();
        assert!((total - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_strategy_switch() {
        let mut cart = cart(Box::new(NoDiscount));
        assert_eq!(cart.strategy_name(), "no discount");

        cart.set_strategy(Box::new(FiftyPercentDiscount));
        assert_eq!(cart.strategy_name(), "50% off");
        assert_eq!(cart.calculate_total(), 150.0);
    }

    #[test]
    fn test_closure_strategy() {
        let flat_ten_off = |_total: f64| 10.0;
        let cart = cart(Box::new(flat_ten_off));
        assert_eq!(cart.calculate_total(), 290.0);
        assert_eq!(cart.strategy_name(), "custom");
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(ShoppingCart::new(Box::new(TenPercentDiscount)).calculate_total(), 0.0);
    }
}
