// Pattern 3: Behavioral Patterns - Chain of Responsibility
// Each step takes what it can from the request and hands the rest down the chain.

use crate::config::DemoConfig;
use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispensed {
    pub bill: u32,
    pub count: u32,
}

impl Dispensed {
    pub fn message(&self) -> String {
        let plural = if self.count > 1 { "s" } else { "" };
        format!("Dispense {} ${} bill{}", self.count, self.bill, plural)
    }
}

/// A withdrawal passed along a chain of bill handlers, largest first.
#[derive(Debug, Clone)]
pub struct CashRequest {
    amount: u32,
    dispensed: Vec<Dispensed>,
}

impl CashRequest {
    pub fn new(amount: u32) -> Self {
        Self {
            amount,
            dispensed: Vec::new(),
        }
    }

    /// Pays out as many `bill`s as fit and returns the request for the next handler.
    pub fn dispense(mut self, bill: u32) -> Self {
        if bill == 0 {
            tracing::warn!("skipping zero-value bill");
            return self;
        }

        let count = self.amount / bill;
        self.amount -= count * bill;

        let step = Dispensed { bill, count };
        tracing::debug!(bill, count, remaining = self.amount, "{}", step.message());
        self.dispensed.push(step);
        self
    }

    pub fn dispense_all(self, bills: &[u32]) -> Self {
        bills.iter().fold(self, |request, &bill| request.dispense(bill))
    }

    pub fn remaining(&self) -> u32 {
        self.amount
    }

    pub fn dispensed(&self) -> &[Dispensed] {
        &self.dispensed
    }
}

pub fn demo(config: &DemoConfig) -> Result<(), PatternError> {
    let request = CashRequest::new(config.withdrawal_amount).dispense_all(&config.denominations);

    for step in request.dispensed() {
        println!("{}", step.message());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_after_each_step() {
        let mut request = CashRequest::new(378);
        let mut remainders = Vec::new();
        for bill in [100, 50, 20, 10, 5, 1] {
            request = request.dispense(bill);
            remainders.push(request.remaining());
        }
        assert_eq!(remainders, vec![78, 28, 8, 8, 3, 0]);
    }

    #[test]
    fn test_chained_calls() {
        let request = CashRequest::new(378)
            .dispense(100)
            .dispense(50)
            .dispense(20)
            .dispense(10)
            .dispense(5)
            .dispense(1);

        let counts: Vec<u32> = request.dispensed().iter().map(|d| d.count).collect();
        assert_eq!(counts, vec![3, 1, 1, 0, 1, 3]);
        assert_eq!(request.remaining(), 0);
    }

    #[test]
    fn test_messages_pluralize() {
        let request = CashRequest::new(378).dispense_all(&[100, 50, 10]);
        let messages: Vec<String> = request.dispensed().iter().map(Dispensed::message).collect();
        assert_eq!(
            messages,
            vec![
                "Dispense 3 $100 bills",
                "Dispense 1 $50 bill",
                "Dispense 2 $10 bills",
            ]
        );
    }

    #[test]
    fn test_zero_bill_is_skipped() {
        let request = CashRequest::new(15).dispense(0).dispense(10);
        assert_eq!(request.dispensed().len(), 1);
        assert_eq!(request.remaining(), 5);
    }
}
