use alloy_core::hex;
use eyre::Result;
use revm::{primitives::U256, InMemoryDB};
use tracing_subscriber::EnvFilter;

use supply_view::{
    provider::{InMemoryProvider, NoProvider},
    view::{TotalSupply, ViewConfig},
};

/// Demo minter runtime: answers every call with 4321.
/// PUSH2 0x10e1 PUSH1 0 MSTORE PUSH1 32 PUSH1 0 RETURN
const MINTER_RUNTIME: &str = "6110e160005260206000f3";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ViewConfig::default();

    // Without a wallet the view settles on its defaults.
    let mut view = TotalSupply::new(config);
    view.refresh(&NoProvider);
    println!("{}\n", view.render());

    // Embedded chain with the demo minter installed and 1.5 ETH collected.
    let provider = InMemoryProvider::new(InMemoryDB::default());
    provider.insert_contract(config.contract, hex::decode(MINTER_RUNTIME)?.into());
    provider.fund(config.contract, U256::from(1_500_000_000_000_000_000u64));

    let mut view = TotalSupply::new(config);
    view.refresh(&provider);
    println!("{}", view.render());

    Ok(())
}
