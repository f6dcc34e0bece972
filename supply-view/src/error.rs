//! Supply-view crate errors

use revm::{
    primitives::{EVMError, ExecutionResult, U256},
    Database, InMemoryDB,
};

pub type Result<T> = core::result::Result<T, Error>;

/// Error encountered while reading from the contract
#[derive(Debug, thiserror::Error)]
pub enum Error<DB: Database = InMemoryDB>
where
    DB::Error: std::error::Error + 'static,
{
    /// EVM error
    #[error(transparent)]
    EvmError(#[from] EVMError<DB::Error>),
    /// Unexpected result of the read call (revert, halt)
    #[error("Unexpected result of the read call: {0:?}")]
    UnexpectedExecResult(ExecutionResult),
    /// The bundled ABI descriptor failed to parse
    #[error("Malformed ABI descriptor: {0}")]
    AbiDescriptor(#[from] serde_json::Error),
    /// Method looked up in the ABI descriptor is not declared there
    #[error("Method not in ABI descriptor: {0}")]
    UnknownMethod(String),
    /// Call output did not decode as the declared return type
    #[error(transparent)]
    AbiDecode(#[from] alloy_sol_types::Error),
    /// Returned value does not fit the display type
    #[error("Value out of display range: {0}")]
    ValueOutOfRange(U256),
}
