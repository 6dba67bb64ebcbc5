//! Pattern 1: Creational Patterns - how objects come into being.

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

use crate::config::DemoConfig;
use crate::error::PatternError;
use crate::section;

pub fn demo(config: &DemoConfig) -> Result<(), PatternError> {
    section("Abstract Factory");
    abstract_factory::demo(config)?;
    println!();

    section("Builder");
    builder::demo(config)?;
    println!();

    section("Factory");
    factory::demo(config)?;
    println!();

    section("Factory Method");
    factory_method::demo(config)?;
    println!();

    section("Prototype");
    prototype::demo(config)?;
    println!();

    section("Singleton");
    singleton::demo(config)
}
