// Pattern 2: Structural Patterns - Adapter
// Old callers speak `operations(a, b, "add")`; the new calculator has
// separate methods. The adapter lets the new one serve the old callers.

use crate::config::DemoConfig;
use crate::error::PatternError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
}

impl FromStr for Operation {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "sub" => Ok(Operation::Sub),
            other => Err(PatternError::unknown_operation(other)),
        }
    }
}

/// The interface existing callers depend on.
pub trait Calculator {
    fn operations(&self, term1: f64, term2: f64, operation: &str) -> Result<f64, PatternError>;
}

pub struct OldCalculator;

impl Calculator for OldCalculator {
    fn operations(&self, term1: f64, term2: f64, operation: &str) -> Result<f64, PatternError> {
        match operation.parse::<Operation>()? {
            Operation::Add => Ok(term1 + term2),
            Operation::Sub => Ok(term1 - term2),
        }
    }
}

pub struct NewCalculator;

impl NewCalculator {
    pub fn add(&self, term1: f64, term2: f64) -> f64 {
        term1 + term2
    }

    pub fn sub(&self, term1: f64, term2: f64) -> f64 {
        term1 - term2
    }
}

pub struct CalculatorAdapter {
    calculator: NewCalculator,
}

impl CalculatorAdapter {
    pub fn new() -> Self {
        Self {
            calculator: NewCalculator,
        }
    }
}

impl Default for CalculatorAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for CalculatorAdapter {
    fn operations(&self, term1: f64, term2: f64, operation: &str) -> Result<f64, PatternError> {
        let result = match operation.parse::<Operation>()? {
            Operation::Add => self.calculator.add(term1, term2),
            Operation::Sub => self.calculator.sub(term1, term2),
        };
        tracing::debug!(operation, result, "adapted call");
        Ok(result)
    }
}

pub fn demo(_config: &DemoConfig) -> Result<(), PatternError> {
    let old = OldCalculator;
    let adapted = CalculatorAdapter::new();

    let calculators: [(&str, &dyn Calculator); 2] = [("Old", &old), ("Adapter", &adapted)];
    for (label, calculator) in calculators {
        println!("{label}: 10 + 5 = {}", calculator.operations(10.0, 5.0, "add")?);
        println!("{label}: 10 - 5 = {}", calculator.operations(10.0, 5.0, "sub")?);
    }

    if let Err(err) = adapted.operations(10.0, 5.0, "mul") {
        println!("Adapter: {err}");
    }
    Ok(())
}
