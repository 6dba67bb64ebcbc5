// Pattern 2: Structural Patterns - Facade
// `place_order` hides three subsystems behind one call and stops at the
// first one that says no.

use crate::config::DemoConfig;
use crate::error::PatternError;
use thiserror::Error;

pub trait PaymentSystem {
    fn check_balance(&self, account_id: &str) -> bool;
}

pub trait InventorySystem {
    fn check_stock(&self, item_id: &str) -> bool;
}

pub trait ShippingSystem {
    fn arrange_delivery(&self, item_id: &str, account_id: &str) -> bool;
}

pub struct Bank;

impl PaymentSystem for Bank {
    fn check_balance(&self, account_id: &str) -> bool {
        println!("Checking balance for account ID: {account_id}");
        true
    }
}

pub struct Warehouse;

impl InventorySystem for Warehouse {
    fn check_stock(&self, item_id: &str) -> bool {
        println!("Checking stock for item ID: {item_id}");
        true
    }
}

pub struct Courier;

impl ShippingSystem for Courier {
    fn arrange_delivery(&self, item_id: &str, account_id: &str) -> bool {
        println!("Arranging delivery for item ID: {item_id} to account ID: {account_id}");
        true
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFailure {
    #[error("Payment failed: Insufficient balance.")]
    InsufficientBalance,
    #[error("Order failed: Item is out of stock.")]
    OutOfStock,
    #[error("Order failed: Delivery arrangement failed.")]
    DeliveryFailed,
}

pub struct ShoppingFacade {
    payment: Box<dyn PaymentSystem>,
    inventory: Box<dyn InventorySystem>,
    shipping: Box<dyn ShippingSystem>,
}

impl ShoppingFacade {
    pub fn new() -> Self {
        Self::with_subsystems(Box::new(Bank), Box::new(Warehouse), Box::new(Courier))
    }

    pub fn with_subsystems(
        payment: Box<dyn PaymentSystem>,
        inventory: Box<dyn InventorySystem>,
        shipping: Box<dyn ShippingSystem>,
    ) -> Self {
        Self {
            payment,
            inventory,
            shipping,
        }
    }

    pub fn place_order(&self, item_id: &str, account_id: &str) -> Result<(), OrderFailure> {
        if !self.payment.check_balance(account_id) {
            return Err(OrderFailure::InsufficientBalance);
        }
        if !self.inventory.check_stock(item_id) {
            return Err(OrderFailure::OutOfStock);
        }
        if !self.shipping.arrange_delivery(item_id, account_id) {
            return Err(OrderFailure::DeliveryFailed);
        }
        tracing::debug!(item_id, account_id, "order placed");
        Ok(())
    }
}

impl Default for ShoppingFacade {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let shopping = ShoppingFacade::new();
    match shopping.place_order("123", "456") {
        Ok(()) => println!("Order placed successfully."),
        Err(failure) => println!("{failure}"),
    }
    Ok(())
}
