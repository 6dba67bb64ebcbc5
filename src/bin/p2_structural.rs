// Pattern 2: Structural Patterns - Adapter, Decorator, Facade, Proxy

use oop_patterns::{structural, telemetry, DemoConfig, PatternError};

fn main() -> Result<(), PatternError> {
    let config = DemoConfig::from_env()?;
    telemetry::init(&config);

    println!("Pattern 2: Structural Patterns");
    println!("===============================\n");

    structural::demo(&config)
}
