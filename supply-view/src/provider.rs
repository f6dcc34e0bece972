//! Wallet-provider seam.
//!
//! The view never talks to a chain directly; it asks a [`WalletProvider`] for
//! a [`ReadConnection`] and degrades gracefully when none is available. The
//! "present" variant here runs read calls on an embedded EVM over an
//! in-memory database; the "absent" variant stands in for environments
//! without a wallet.

use std::cell::RefCell;

use revm::{
    primitives::{
        address, keccak256, AccountInfo, Address, Bytecode, Bytes, EVMError, ExecutionResult,
        Output, TransactTo, U256,
    },
    Database, Evm, InMemoryDB,
};
use tracing::debug;

use crate::error::{Error, Result};

/// Caller used for read calls; never signs or transfers anything.
const READ_CALLER: Address = address!("0000000000000000000000000000000000000007");

/// Read-only connection to a chain.
pub trait ReadConnection {
    /// Execute a read call against `to` and return the raw output bytes.
    /// State is never committed.
    fn call(&self, to: Address, calldata: Vec<u8>) -> Result<Bytes>;

    /// Native-currency balance of `account`, in wei.
    fn balance(&self, account: Address) -> Result<U256>;
}

/// Environment capability check: a wallet provider may or may not be able to
/// hand out a connection.
pub trait WalletProvider {
    fn connection(&self) -> Option<&dyn ReadConnection>;
}

/// Wallet provider backed by an embedded EVM over an [`InMemoryDB`].
pub struct InMemoryProvider {
    db: RefCell<InMemoryDB>,
}

impl InMemoryProvider {
    pub fn new(db: InMemoryDB) -> Self {
        Self {
            db: RefCell::new(db),
        }
    }

    /// Install `bytecode` as the runtime code of the account at `addr`.
    pub fn insert_contract(&self, addr: Address, bytecode: Bytes) {
        let account = AccountInfo::new(
            U256::ZERO,
            0,
            keccak256(&bytecode),
            Bytecode::new_raw(bytecode),
        );
        self.db.borrow_mut().insert_account_info(addr, account);
    }

    /// Credit `addr` with `wei` of native currency.
    pub fn fund(&self, addr: Address, wei: U256) {
        let mut db = self.db.borrow_mut();
        let mut info = match db.basic(addr) {
            Ok(Some(info)) => info,
            _ => AccountInfo::default(),
        };
        info.balance = info.balance.saturating_add(wei);
        db.insert_account_info(addr, info);
    }
}

impl ReadConnection for InMemoryProvider {
    fn call(&self, to: Address, calldata: Vec<u8>) -> Result<Bytes> {
        let mut db = self.db.borrow_mut();
        let mut evm = Evm::builder()
            .with_db(&mut *db)
            .modify_tx_env(|tx| {
                tx.caller = READ_CALLER;
                tx.transact_to = TransactTo::Call(to);
                tx.data = calldata.into();
                tx.value = U256::ZERO;
            })
            .build();

        // transact(), not transact_commit(): read calls leave no trace
        let result = evm.transact()?.result;
        match result {
            ExecutionResult::Success {
                output: Output::Call(value),
                ..
            } => {
                debug!("Read call output: {:#?}", value);
                Ok(value)
            }
            result => Err(Error::UnexpectedExecResult(result)),
        }
    }

    fn balance(&self, account: Address) -> Result<U256> {
        let mut db = self.db.borrow_mut();
        let info = db.basic(account).map_err(EVMError::Database)?;
        Ok(info.map(|acc| acc.balance).unwrap_or_default())
    }
}

impl WalletProvider for InMemoryProvider {
    fn connection(&self) -> Option<&dyn ReadConnection> {
        Some(self)
    }
}

/// Absent-wallet variant: no connection in this environment.
#[derive(Debug, Default)]
pub struct NoProvider;

impl WalletProvider for NoProvider {
    fn connection(&self) -> Option<&dyn ReadConnection> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_of_unknown_account_is_zero() {
        let provider = InMemoryProvider::new(InMemoryDB::default());
        let who = address!("000000000000000000000000000000000000000A");
        assert_eq!(provider.balance(who).unwrap(), U256::ZERO);
    }

    #[test]
    fn funding_accumulates() {
        let provider = InMemoryProvider::new(InMemoryDB::default());
        let who = address!("000000000000000000000000000000000000000A");
        provider.fund(who, U256::from(7));
        provider.fund(who, U256::from(5));
        assert_eq!(provider.balance(who).unwrap(), U256::from(12));
    }

    #[test]
    fn call_to_empty_account_returns_empty_output() {
        let provider = InMemoryProvider::new(InMemoryDB::default());
        let to = address!("000000000000000000000000000000000000000B");
        let output = provider.call(to, vec![0, 1, 2, 3]).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn absent_provider_has_no_connection() {
        assert!(NoProvider.connection().is_none());
    }
}
