//! Allocate, resolve, approve and transfer on a small grid.
//!
//! Run with `RUST_LOG=parcel_engine=debug` to see every commit and
//! rejection.

use parcel_core::{Identity, Tier};
use parcel_curve::GridPoint;
use parcel_engine::{LandRegistry, RegistryConfig, RegistryService, ServiceConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let alice = Identity(1);
    let bob = Identity(2);

    let mut registry = LandRegistry::new(RegistryConfig::new(5))?;
    let plaza = registry.allocate_with_uri(0, Tier::Large, alice, "ipfs://plaza")?;
    registry.allocate(64, Tier::Small, bob)?;
    println!("plaza covers {}", plaza.footprint());

    if let Err(e) = registry.allocate(8, Tier::XSmall, bob) {
        println!("bob cannot build inside the plaza: {e}");
    }

    let rect = registry.grid().footprint_rect(0, Tier::Large)?;
    let corner = GridPoint::new(rect.x + rect.side - 1, rect.y + rect.side - 1);
    println!("cell {corner} belongs to {:?}", registry.owner_at(corner)?);

    registry.approve(0, bob, alice)?;
    registry.transfer(0, alice, bob, bob)?;
    println!(
        "after transfer: alice={} bob={}",
        registry.balance_of(alice),
        registry.balance_of(bob)
    );

    let service = RegistryService::new(registry, ServiceConfig::default())?;
    service.allocate(128, Tier::Medium, alice)?;
    let registry = service.shutdown()?;
    println!("{} parcels, metrics: {:?}", registry.parcel_count(), registry.metrics());
    Ok(())
}
