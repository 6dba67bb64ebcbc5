//! Pattern 2: Structural Patterns - how objects wrap and front one another.

pub mod adapter;
pub mod decorator;
pub mod facade;
pub mod proxy;

use crate::config::DemoConfig;
use crate::error::PatternError;
use crate::section;

pub fn demo(config: &DemoConfig) -> Result<(), PatternError> {
    section("Adapter");
    adapter::demo(config)?;
    println!();

    section("Decorator");
    decorator::demo(config)?;
    println!();

    section("Facade");
    facade::demo(config)?;
    println!();

    section("Proxy");
    proxy::demo(config)
}
