// Pattern 3: Behavioral Patterns - Chain of Responsibility, Iterator,
// Strategy, Template Method, State

use oop_patterns::{behavioral, telemetry, DemoConfig, PatternError};

#[tokio::main]
async fn main() -> Result<(), PatternError> {
    let config = DemoConfig::from_env()?;
    telemetry::init(&config);

    println!("Pattern 3: Behavioral Patterns");
    println!("===============================\n");

    behavioral::demo(&config).await
}
