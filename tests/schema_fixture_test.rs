//! Contract tests against captured response bodies in `tests/fixtures/`.
//!
//! If LI.FI changes a response layout, refresh the fixture and these tests show
//! exactly which paths moved.

use lifi_api_tests_rs::common::{AddressFamily, address_family, amounts_ordered, usd_value};
use lifi_api_tests_rs::schema::{StepType, ToolErrors};
use lifi_api_tests_rs::{ResponseKind, ValidatedBody, is_positive_amount, validate};
use serde_json::Value;
use std::path::PathBuf;

fn load_fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("Fixture {} is not JSON: {}", name, e))
}

fn validated(kind: ResponseKind, name: &str) -> ValidatedBody {
    validate(kind, &load_fixture(name)).unwrap_or_else(|violations| {
        let lines: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
        panic!("{} fixture failed validation:\n{}", name, lines.join("\n"))
    })
}

#[test]
fn test_quote_fixture_contract() {
    let ValidatedBody::Quote(step) = validated(ResponseKind::Quote, "quote_step.json") else {
        panic!("expected a quote body");
    };

    assert_eq!(step.kind, Some(StepType::Lifi));
    assert_eq!(step.included_steps().len(), 2);
    assert_eq!(step.included_steps()[0].kind, "protocol");
    assert_eq!(step.included_steps()[1].kind, "cross");
    assert!(step.transaction_request.is_some());

    let estimate = &step.estimate;
    assert!(is_positive_amount(&estimate.to_amount));
    assert_eq!(amounts_ordered(&estimate.to_amount_min, &estimate.to_amount), Some(true));
    for fee in estimate.fee_costs.iter().flatten() {
        assert!(usd_value(&fee.amount_usd).is_some(), "fee {} amountUSD", fee.name);
    }
}

#[test]
fn test_advanced_routes_fixture_contract() {
    let ValidatedBody::AdvancedRoutes(response) =
        validated(ResponseKind::AdvancedRoutes, "advanced_routes.json")
    else {
        panic!("expected an advanced routes body");
    };

    assert_eq!(response.routes.len(), 1);
    let route = &response.routes[0];
    assert_eq!(route.from_chain_id, 1);
    assert_eq!(route.to_chain_id, 137);
    assert_eq!(route.from_amount, "10000000");
    assert!(!route.steps.is_empty());
    assert_eq!(amounts_ordered(&route.to_amount_min, &route.to_amount), Some(true));
    assert!(response.unavailable_routes.is_some());
}

#[test]
fn test_tools_fixture_contract() {
    let ValidatedBody::Tools(tools) = validated(ResponseKind::Tools, "tools.json") else {
        panic!("expected a tools body");
    };

    let bridges = tools.bridges.as_deref().unwrap();
    let mayan = bridges.iter().find(|b| b.key == "mayan").unwrap();
    let pair = &mayan.supported_chains.as_deref().unwrap()[0];
    assert_eq!(pair.to_chain_id.as_u64(), Some(1151111081099710));

    let exchanges = tools.exchanges.as_deref().unwrap();
    let chains: Vec<Option<u64>> = exchanges[0]
        .supported_chains
        .iter()
        .flatten()
        .map(|c| c.as_u64())
        .collect();
    assert_eq!(chains, vec![Some(1), Some(10), Some(137), Some(42161)]);
}

#[test]
fn test_token_fixture_contract() {
    let ValidatedBody::Token(single) = validated(ResponseKind::Token, "token_sol.json") else {
        panic!("expected a token body");
    };

    assert_eq!(single.token.symbol, "SOL");
    assert_eq!(single.token.decimals, 9);
    assert_eq!(address_family(&single.token.address), AddressFamily::Base58);
    assert!(single.market_cap_usd.unwrap() > 0.0);
    assert!(single.volume_usd_24h.unwrap() >= 0.0);
    assert!(single.token.price_usd.as_deref().and_then(usd_value).is_some());
}

#[test]
fn test_error_fixtures_accept_both_tool_error_layouts() {
    let ValidatedBody::Error(keyed) = validated(ResponseKind::Error, "error_keyed.json") else {
        panic!("expected an error body");
    };
    match keyed.errors {
        Some(ToolErrors::ByKey(ref map)) => assert!(map.contains_key("stargateV2")),
        ref other => panic!("expected keyed tool errors, got {:?}", other),
    }

    let ValidatedBody::Error(listed) = validated(ResponseKind::Error, "error_list.json") else {
        panic!("expected an error body");
    };
    assert_eq!(listed.status_code, Some(404.0));
    let tools: Vec<Option<&str>> = listed
        .errors
        .as_ref()
        .unwrap()
        .iter()
        .map(|(_, e)| e.tool.as_deref())
        .collect();
    assert_eq!(tools, vec![Some("across"), Some("hop")]);
}

#[test]
fn test_fixture_drift_is_reported_by_path() {
    let mut body = load_fixture("quote_step.json");
    body["estimate"]["toAmount"] = Value::from(9971234);
    body["includedSteps"][1]["action"]["fromToken"]
        .as_object_mut()
        .unwrap()
        .remove("decimals");

    let violations = validate(ResponseKind::Quote, &body).unwrap_err();
    let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
    assert!(paths.contains(&"estimate.toAmount"), "{:?}", paths);
    assert!(
        paths.contains(&"includedSteps[1].action.fromToken.decimals"),
        "{:?}",
        paths
    );
}
