// src/common/utils.rs
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::str::FromStr;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Address encoding family, detected from the string itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    /// `0x` followed by 40 hex digits. Case-insensitive.
    Evm,
    /// 32 to 44 base58 characters. Case-sensitive.
    Base58,
    Unknown,
}

// `0x` + exactly 40 hex characters
pub fn is_valid_evm_address(address: &str) -> bool {
    address.len() == 42
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}

// 32-44 characters of the Bitcoin base58 alphabet (no 0, O, I, l)
pub fn is_valid_solana_address(address: &str) -> bool {
    (32..=44).contains(&address.len()) && address.chars().all(|c| BASE58_ALPHABET.contains(c))
}

pub fn address_family(address: &str) -> AddressFamily {
    if is_valid_evm_address(address) {
        AddressFamily::Evm
    } else if is_valid_solana_address(address) {
        AddressFamily::Base58
    } else {
        AddressFamily::Unknown
    }
}

/// Canonical form for comparison. Only EVM hex addresses are lowercased;
/// base58 and unrecognised strings are returned untouched.
pub fn normalize_address(address: &str) -> String {
    match address_family(address) {
        AddressFamily::Evm => address.to_ascii_lowercase(),
        AddressFamily::Base58 | AddressFamily::Unknown => address.to_string(),
    }
}

pub fn addresses_match(a: &str, b: &str) -> bool {
    normalize_address(a) == normalize_address(b)
}

/// True when `amount` parses as a finite number strictly greater than zero.
pub fn is_positive_amount(amount: &str) -> bool {
    amount
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}

/// Exact `min <= amount` for unsigned integer base-unit strings of any length.
/// Returns `None` if either side is not a plain digit string.
pub fn amounts_ordered(min: &str, amount: &str) -> Option<bool> {
    let min = canonical_digits(min)?;
    let amount = canonical_digits(amount)?;
    let ordering = min.len().cmp(&amount.len()).then_with(|| min.cmp(amount));
    Some(ordering != Ordering::Greater)
}

fn canonical_digits(value: &str) -> Option<&str> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = value.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed })
}

// Parse a USD decimal string such as "145.2301"
pub fn usd_value(value: &str) -> Option<Decimal> {
    Decimal::from_str(value.trim()).ok()
}

// get timestamp in milliseconds
pub fn get_timestamp_millis() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .try_into()
        .unwrap_or(0)
}
