//! Test data shared by the live suites.

use crate::lifi::{QuoteParams, RoutesRequest};

pub const TEST_EVM_WALLET_ADDRESS: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
pub const CUSTOM_EVM_WALLET_ADDRESS: &str = "0x552008c0f6870c2f77e5cC1d2eb9bdff03e30Ea0";

pub const NATIVE_TOKEN: &str = "0x0000000000000000000000000000000000000000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub name: &'static str,
    pub from_chain: &'static str,
    pub to_chain: &'static str,
    pub from_token: &'static str,
    pub to_token: &'static str,
    pub from_amount: &'static str,
}

impl TokenPair {
    pub fn from_chain_id(&self) -> u64 {
        self.from_chain.parse().unwrap_or_default()
    }

    pub fn to_chain_id(&self) -> u64 {
        self.to_chain.parse().unwrap_or_default()
    }

    /// Quote request from the test wallet to itself.
    pub fn quote_params(&self) -> QuoteParams {
        QuoteParams {
            to_address: Some(TEST_EVM_WALLET_ADDRESS.to_string()),
            ..QuoteParams::new(
                self.from_chain,
                self.to_chain,
                self.from_token,
                self.to_token,
                self.from_amount,
                TEST_EVM_WALLET_ADDRESS,
            )
        }
    }

    pub fn routes_request(&self) -> RoutesRequest {
        RoutesRequest {
            from_chain_id: self.from_chain_id(),
            to_chain_id: self.to_chain_id(),
            from_token_address: self.from_token.to_string(),
            to_token_address: self.to_token.to_string(),
            from_amount: self.from_amount.to_string(),
            from_address: Some(TEST_EVM_WALLET_ADDRESS.to_string()),
            to_address: Some(TEST_EVM_WALLET_ADDRESS.to_string()),
            ..Default::default()
        }
    }

    /// Same pair with only the amount swapped out.
    pub fn with_amount(&self, from_amount: &'static str) -> Self {
        Self {
            from_amount,
            ..self.clone()
        }
    }

    /// Chains, tokens and amount taken from `other`, keeping this pair's name.
    pub fn with_inputs_of(&self, other: &TokenPair) -> Self {
        Self {
            name: self.name,
            ..other.clone()
        }
    }
}

pub const TOKEN_PAIRS: &[TokenPair] = &[
    TokenPair {
        name: "USDC to USDT on Ethereum",
        from_chain: "1",
        to_chain: "1",
        from_token: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        to_token: "0xdAC17F958D2ee523a2206206994597C13D831ec7",
        from_amount: "10000000",
    },
    TokenPair {
        name: "USDC Ethereum to USDC Polygon",
        from_chain: "1",
        to_chain: "137",
        from_token: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        to_token: "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359",
        from_amount: "10000000",
    },
    TokenPair {
        name: "USDC Arbitrum to USDC Optimism",
        from_chain: "42161",
        to_chain: "10",
        from_token: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831",
        to_token: "0x0b2C639c533813f4Aa9D7837cAf62653d097Ff85",
        from_amount: "10000000",
    },
    TokenPair {
        name: "ETH Arbitrum to ETH Base",
        from_chain: "42161",
        to_chain: "8453",
        from_token: NATIVE_TOKEN,
        to_token: NATIVE_TOKEN,
        from_amount: "10000000000000000",
    },
    TokenPair {
        name: "USDC Base to USDC Ethereum",
        from_chain: "8453",
        to_chain: "1",
        from_token: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
        to_token: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        from_amount: "20000000",
    },
];

/// [0]: malformed token address. [1]: unsupported chain id.
pub const INVALID_TOKENS: &[TokenPair] = &[
    TokenPair {
        name: "Invalid token address",
        from_chain: "1",
        to_chain: "1",
        from_token: "0xinvalid",
        to_token: "0xdAC17F958D2ee523a2206206994597C13D831ec7",
        from_amount: "10000000",
    },
    TokenPair {
        name: "Invalid chain id",
        from_chain: "99999",
        to_chain: "99999",
        from_token: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        to_token: "0xdAC17F958D2ee523a2206206994597C13D831ec7",
        from_amount: "10000000",
    },
];

pub const ZERO_AMOUNT: &str = "0";
pub const LARGE_AMOUNT: &str = "999999999999999999999999999999";
pub const NEGATIVE_AMOUNT: &str = "-1000000";

pub fn primary_pair() -> &'static TokenPair {
    &TOKEN_PAIRS[0]
}

/// Expected metadata for a non-EVM native asset served by `GET /token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCase {
    pub chain: &'static str,
    pub token: &'static str,
    pub symbol: &'static str,
    pub decimals: u64,
    pub name: &'static str,
    pub coin_key: &'static str,
}

pub const TOKEN_CASES: &[TokenCase] = &[
    TokenCase {
        chain: "SOL",
        token: "Sol",
        symbol: "SOL",
        decimals: 9,
        name: "SOL",
        coin_key: "SOL",
    },
    TokenCase {
        chain: "BTC",
        token: "BTC",
        symbol: "BTC",
        decimals: 8,
        name: "Bitcoin",
        coin_key: "BTC",
    },
    TokenCase {
        chain: "SUI",
        token: "SUI",
        symbol: "SUI",
        decimals: 9,
        name: "SUI",
        coin_key: "SUI",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::is_valid_evm_address;

    #[test]
    fn fixture_addresses_are_well_formed() {
        assert!(is_valid_evm_address(TEST_EVM_WALLET_ADDRESS));
        assert!(is_valid_evm_address(CUSTOM_EVM_WALLET_ADDRESS));
        for pair in TOKEN_PAIRS {
            assert!(is_valid_evm_address(pair.from_token), "{}", pair.name);
            assert!(is_valid_evm_address(pair.to_token), "{}", pair.name);
            assert!(pair.from_chain_id() > 0);
        }
        assert!(!is_valid_evm_address(INVALID_TOKENS[0].from_token));
    }

    #[test]
    fn routes_request_uses_numeric_chain_ids() {
        let request = TOKEN_PAIRS[1].routes_request();
        assert_eq!(request.from_chain_id, 1);
        assert_eq!(request.to_chain_id, 137);
        assert_eq!(request.from_address.as_deref(), Some(TEST_EVM_WALLET_ADDRESS));
    }

    #[test]
    fn invalid_inputs_override_chains_tokens_and_amount() {
        let pair = primary_pair().with_inputs_of(&INVALID_TOKENS[1]);
        assert_eq!(pair.name, primary_pair().name);
        assert_eq!(pair.from_chain, "99999");
        assert_eq!(primary_pair().with_amount(ZERO_AMOUNT).from_amount, "0");
    }
}
