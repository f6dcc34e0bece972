//! Bundled ABI descriptor for the minter contract.
//!
//! The descriptor ships with the crate as JSON and is handed to the contract
//! reader verbatim; the only interpretation done here is deriving 4-byte
//! selectors from canonical function signatures.

use revm::primitives::keccak256;
use serde::Deserialize;

use crate::error::{Error, Result};

/// ABI JSON shipped with the minter contract deployment.
pub const MINTER_ABI_JSON: &str = include_str!("../abi/minter.json");

/// Machine-readable description of a contract's callable interface.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiDescriptor {
    pub abi: Vec<AbiEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbiEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AbiDescriptor {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 4-byte selector of the named function: keccak256 of its canonical
    /// signature, `name(type,type,...)`.
    pub fn selector(&self, method: &str) -> Result<[u8; 4]> {
        let entry = self
            .abi
            .iter()
            .find(|e| e.kind == "function" && e.name == method)
            .ok_or_else(|| Error::UnknownMethod(method.to_string()))?;

        let args = entry
            .inputs
            .iter()
            .map(|p| p.kind.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let sig = format!("{}({})", entry.name, args);

        let hash = keccak256(sig.as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash[0..4]);
        Ok(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_descriptor_parses() {
        let abi = AbiDescriptor::from_json(MINTER_ABI_JSON).unwrap();
        assert!(abi.abi.iter().any(|e| e.name == "totalSupply"));
    }

    #[test]
    fn total_supply_selector_matches_canonical() {
        let abi = AbiDescriptor::from_json(MINTER_ABI_JSON).unwrap();
        // keccak256("totalSupply()")[0..4]
        assert_eq!(abi.selector("totalSupply").unwrap(), [0x18, 0x16, 0x0d, 0xdd]);
    }

    #[test]
    fn selector_includes_argument_types() {
        let abi = AbiDescriptor::from_json(MINTER_ABI_JSON).unwrap();
        // keccak256("balanceOf(address)")[0..4]
        assert_eq!(abi.selector("balanceOf").unwrap(), [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn unknown_method_is_an_error() {
        let abi = AbiDescriptor::from_json(MINTER_ABI_JSON).unwrap();
        assert!(matches!(
            abi.selector("selfDestruct"),
            Err(Error::UnknownMethod(_))
        ));
    }

    #[test]
    fn events_are_not_callable() {
        let abi = AbiDescriptor::from_json(MINTER_ABI_JSON).unwrap();
        assert!(matches!(
            abi.selector("Transfer"),
            Err(Error::UnknownMethod(_))
        ));
    }
}
