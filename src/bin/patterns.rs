// Runs every pattern driver in catalog order.

use oop_patterns::{behavioral, creational, structural, telemetry, DemoConfig, PatternError};

#[tokio::main]
async fn main() -> Result<(), PatternError> {
    let config = DemoConfig::from_env()?;
    telemetry::init(&config);
    tracing::debug!(?config, "loaded configuration");

    println!("Object-Oriented Design Patterns");
    println!("================================\n");

    creational::demo(&config)?;
    println!();
    structural::demo(&config)?;
    println!();
    behavioral::demo(&config).await
}
