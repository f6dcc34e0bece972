//! Typed read-only facade over the minter contract.

use alloy_sol_types::SolValue;
use revm::primitives::{Address, Bytes, U256};
use tracing::debug;

use crate::{
    abi::AbiDescriptor,
    error::{Error, Result},
    provider::ReadConnection,
};

/// Reads from one deployed contract through a wallet connection.
pub struct ContractReader<'a> {
    address: Address,
    abi: AbiDescriptor,
    connection: &'a dyn ReadConnection,
}

impl<'a> ContractReader<'a> {
    pub fn new(address: Address, abi: AbiDescriptor, connection: &'a dyn ReadConnection) -> Self {
        Self {
            address,
            abi,
            connection,
        }
    }

    /// Number of tokens minted so far, from the contract's `totalSupply()`.
    pub fn total_supply(&self) -> Result<u64> {
        let calldata = self.abi.selector("totalSupply")?.to_vec();
        debug!("totalSupply calldata: {:#?}", Bytes::from(calldata.clone()));

        let output = self.connection.call(self.address, calldata)?;
        let supply = U256::abi_decode(&output, true)?;
        supply
            .try_into()
            .map_err(|_| Error::ValueOutOfRange(supply))
    }

    /// Native-currency balance held by the contract, in wei.
    pub fn native_balance(&self) -> Result<U256> {
        self.connection.balance(self.address)
    }
}
