// Every driver runs end to end against a fast configuration.

use oop_patterns::behavioral::chain_of_responsibility::CashRequest;
use oop_patterns::config::TrafficLightConfig;
use oop_patterns::{behavioral, creational, structural, DemoConfig};

fn fast_config() -> DemoConfig {
    DemoConfig {
        traffic_light: TrafficLightConfig { tick_ms: 1, cycles: 1 },
        ..DemoConfig::default()
    }
}

#[test]
fn creational_drivers_run() {
    creational::demo(&fast_config()).unwrap();
}

#[test]
fn structural_drivers_run() {
    structural::demo(&fast_config()).unwrap();
}

#[tokio::test]
async fn behavioral_drivers_run() {
    behavioral::demo(&fast_config()).await.unwrap();
}

#[test]
fn configured_denominations_drive_the_chain() {
    let config = DemoConfig::parse("withdrawal_amount = 95\ndenominations = [50, 20, 5]").unwrap();
    let request = CashRequest::new(config.withdrawal_amount).dispense_all(&config.denominations);

    let counts: Vec<u32> = request.dispensed().iter().map(|d| d.count).collect();
    assert_eq!(counts, vec![1, 2, 1]);
    assert_eq!(request.remaining(), 0);
}
