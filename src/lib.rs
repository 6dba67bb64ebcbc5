// Classic Object-Oriented Design Patterns
// Each pattern lives in its own module with a small driver that prints to the console.

//! # Object-Oriented Design Patterns in Rust
//!
//! This crate provides runnable examples for:
//!
//! ## Pattern 1: Creational Patterns
//! - Abstract Factory (theme -> matching button)
//! - Builder (chained toppings)
//! - Factory and Factory Method (`Person` construction)
//! - Prototype (`Clone`-backed copies)
//! - Singleton (explicit registry instead of a global)
//!
//! ## Pattern 2: Structural Patterns
//! - Adapter (legacy calculator interface over a new one)
//! - Decorator (extra behaviour over a borrowed value)
//! - Facade (one call sequencing three subsystems)
//! - Proxy (validated accessors)
//!
//! ## Pattern 3: Behavioral Patterns
//! - Chain of Responsibility (cash dispenser)
//! - Iterator (cursor over a custom list)
//! - State (traffic light driven by a ticker)
//! - Strategy (discounts on a shopping cart)
//! - Template Method (sandwich recipe skeleton)
//!
//! Run individual categories with:
//! ```bash
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! cargo run --bin p3_behavioral
//! cargo run --bin patterns
//! ```

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod error;
pub mod structural;
pub mod telemetry;

pub use config::DemoConfig;
pub use error::{ConfigError, PatternError};

use colored::Colorize;

/// Prints a section header the way every driver opens its output.
pub fn section(title: &str) {
    println!("{}", format!("=== {title} ===").bold().cyan());
}
