//! Pattern 3: Behavioral Patterns - how objects share work and hand off control.

pub mod chain_of_responsibility;
pub mod iterator;
pub mod state;
pub mod strategy;
pub mod template_method;

use crate::config::DemoConfig;
use crate::error::PatternError;
use crate::section;

pub async fn demo(config: &DemoConfig) -> Result<(), PatternError> {
    section("Chain of Responsibility");
    chain_of_responsibility::demo(config)?;
    println!();

    section("Iterator");
    iterator::demo(config)?;
    println!();

    section("Strategy");
    strategy::demo(config)?;
    println!();

    section("Template Method");
    template_method::demo(config)?;
    println!();

    section("State");
    state::demo(config).await
}
