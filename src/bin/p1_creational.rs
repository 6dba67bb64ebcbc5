// Pattern 1: Creational Patterns - Abstract Factory, Builder, Factory,
// Factory Method, Prototype, Singleton

use oop_patterns::{creational, telemetry, DemoConfig, PatternError};

fn main() -> Result<(), PatternError> {
    let config = DemoConfig::from_env()?;
    telemetry::init(&config);

    println!("Pattern 1: Creational Patterns");
    println!("===============================\n");

    creational::demo(&config)
}
