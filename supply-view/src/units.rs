//! Wei to ether display conversion.

use revm::primitives::U256;

/// Decimals of the native currency's smallest unit.
pub const ETHER_DECIMALS: usize = 18;

/// Format a wei amount as an exact base-10 ether string.
///
/// Whole-ether amounts render without a decimal point; fractional digits are
/// trimmed of trailing zeros. All arithmetic is integral, so values such as
/// 1.5 come out exact.
pub fn format_ether(wei: U256) -> String {
    let scale = U256::from(10u64).pow(U256::from(ETHER_DECIMALS));
    let whole = wei / scale;
    let frac = wei % scale;

    if frac.is_zero() {
        return whole.to_string();
    }

    let frac = format!("{:0>width$}", frac.to_string(), width = ETHER_DECIMALS);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
