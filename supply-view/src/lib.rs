//! Read-only supply view for a minter contract.
//!
//! Queries one deployed contract for the number of tokens minted and the
//! native-currency balance it holds, and renders both as a two-line text
//! summary. Chain access goes through the [`provider::WalletProvider`] seam,
//! so environments without a wallet degrade to a settled, zero-value display.

pub mod abi;
pub mod contract;
pub mod error;
pub mod provider;
pub mod test_utils;
pub mod units;
pub mod view;

pub use error::{Error, Result};
pub use view::{TotalSupply, ViewConfig};
