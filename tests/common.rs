use lifi_api_tests_rs::fixtures::TokenPair;
use lifi_api_tests_rs::schema::{Action, Route};
use lifi_api_tests_rs::{ExpectedStatuses, LifiClient, addresses_match, init_tracing};

// Allow dead code warnings since different test files use different items from this module
#[allow(dead_code)]
pub const OK_OR_NOT_FOUND: &[u16] = &[200, 404];
#[allow(dead_code)]
pub const CLIENT_ERRORS: &[u16] = &[400, 404, 422];
#[allow(dead_code)]
pub const BAD_INPUT: &[u16] = &[400, 422];

pub fn client() -> LifiClient {
    init_tracing();
    LifiClient::from_env().expect("Failed to build LI.FI client from env")
}

#[allow(dead_code)]
pub fn expected(statuses: &[u16]) -> ExpectedStatuses {
    ExpectedStatuses::of(statuses)
}

/// Return early from a test when the outcome was rate limited.
#[allow(unused_macros)]
macro_rules! skip_if_rate_limited {
    ($outcome:expr, $label:expr) => {
        if $outcome.is_rate_limited {
            println!("{}: rate limited (429), skipping assertions", $label);
            return;
        }
    };
}

#[allow(dead_code)]
pub fn assert_action_echoes(pair: &TokenPair, action: &Action) {
    assert_eq!(action.from_chain_id, pair.from_chain_id(), "fromChainId for {}", pair.name);
    assert_eq!(action.to_chain_id, pair.to_chain_id(), "toChainId for {}", pair.name);
    assert!(
        addresses_match(&action.from_token.address, pair.from_token),
        "fromToken {} should echo {}",
        action.from_token.address,
        pair.from_token
    );
    assert!(
        addresses_match(&action.to_token.address, pair.to_token),
        "toToken {} should echo {}",
        action.to_token.address,
        pair.to_token
    );
    assert_eq!(action.from_amount, pair.from_amount, "fromAmount for {}", pair.name);
    println!(
        "Action: {} {} (chain {}) -> {} (chain {})",
        action.from_amount,
        action.from_token.symbol,
        action.from_chain_id,
        action.to_token.symbol,
        action.to_chain_id
    );
}

#[allow(dead_code)]
pub fn assert_route_echoes(pair: &TokenPair, route: &Route) {
    assert!(!route.id.is_empty(), "Route id should be present");
    assert_eq!(route.from_chain_id, pair.from_chain_id());
    assert_eq!(route.to_chain_id, pair.to_chain_id());
    assert!(addresses_match(&route.from_token.address, pair.from_token));
    assert!(addresses_match(&route.to_token.address, pair.to_token));
    assert_eq!(route.from_amount, pair.from_amount);
    assert!(!route.steps.is_empty(), "Route should have at least one step");
    println!(
        "Route {}: {} -> {} in {} step(s)",
        route.id,
        route.from_amount,
        route.to_amount,
        route.steps.len()
    );
}
