//! List units example.
//!
//! This example connects to a fleet API, lists every unit (following
//! pagination) and prints the systemd state of each.
//!
//! Run with: FLEET_API_URL=http://127.0.0.1:49153 cargo run --example list_units

use fleet_rs::{ClientConfig, FleetClient};

#[tokio::main]
async fn main() -> fleet_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("FLEET_API_URL")
        .unwrap_or_else(|_| fleet_rs::client::DEFAULT_BASE_URL.to_string());

    let client = FleetClient::new(ClientConfig::default().with_base_url(base_url))?;

    let machines = client.machines().list().await?;
    println!("Found {} machine(s):", machines.len());
    for machine in &machines {
        println!("  - {} ({})", machine.id, machine.primary_ip);
    }

    let units = client.units().list().await?;
    println!("\nFound {} unit(s):", units.len());
    for unit in &units {
        println!(
            "  - {} desired={:?} current={:?}",
            unit.name, unit.desired_state, unit.current_state
        );
    }

    for state in client.states().list(None).await? {
        println!(
            "{} on {}: {}/{}",
            state.name, state.machine_id, state.systemd_active_state, state.systemd_sub_state
        );
    }

    Ok(())
}
