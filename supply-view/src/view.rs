//! The `TotalSupply` view component.

use revm::primitives::{address, Address};
use tracing::warn;

use crate::{
    abi::{AbiDescriptor, MINTER_ABI_JSON},
    contract::ContractReader,
    provider::WalletProvider,
    units::format_ether,
};

/// Minter deployment this view was originally built against.
pub const DEFAULT_CONTRACT: Address = address!("73F5c026a16777Ca435E79242634ac28215C91e4");

/// Collection size of that deployment.
pub const DEFAULT_SUPPLY_CAP: u64 = 10_000;

/// Where to find the contract and how large the collection is.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    pub contract: Address,
    pub supply_cap: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            contract: DEFAULT_CONTRACT,
            supply_cap: DEFAULT_SUPPLY_CAP,
        }
    }
}

/// Two-line supply summary for a minter contract.
///
/// Holds only transient view state. All chain access goes through the wallet
/// provider handed to [`refresh`](TotalSupply::refresh); fetch failures are
/// logged and swallowed, keeping the previous value on screen.
#[derive(Debug, Clone)]
pub struct TotalSupply {
    config: ViewConfig,
    loading: bool,
    total_minted: u64,
    total_value: String,
}

impl TotalSupply {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            loading: true,
            total_minted: 0,
            total_value: "0".to_string(),
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn total_minted(&self) -> u64 {
        self.total_minted
    }

    pub fn total_value(&self) -> &str {
        &self.total_value
    }

    /// Query the contract through `provider` and settle the loading flag.
    ///
    /// Both reads are attempted independently; each failure only keeps the
    /// previous value of its own field. Without a wallet connection the view
    /// settles on its defaults. `loading` is false after every call.
    pub fn refresh(&mut self, provider: &dyn WalletProvider) {
        let Some(connection) = provider.connection() else {
            warn!("No wallet connection available");
            self.loading = false;
            return;
        };

        let abi = match AbiDescriptor::from_json(MINTER_ABI_JSON) {
            Ok(abi) => abi,
            Err(e) => {
                warn!("Bundled ABI descriptor failed to parse: {e}");
                self.loading = false;
                return;
            }
        };

        let reader = ContractReader::new(self.config.contract, abi, connection);

        match reader.total_supply() {
            Ok(minted) => self.total_minted = minted,
            Err(e) => warn!("Failed to fetch total supply: {e}"),
        }

        match reader.native_balance() {
            Ok(wei) => self.total_value = format_ether(wei),
            Err(e) => warn!("Failed to fetch contract balance: {e}"),
        }

        self.loading = false;
    }

    /// Render the two-line summary.
    pub fn render(&self) -> String {
        let minted = if self.loading {
            "Loading...".to_string()
        } else {
            format!("{}/{}", self.total_minted, self.config.supply_cap)
        };
        let value = if self.loading {
            "Loading...".to_string()
        } else {
            format!("{}ETH", self.total_value)
        };
        format!("Tokens minted: {minted}\nContract value: {value}")
    }
}
