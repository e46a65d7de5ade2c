#[macro_use]
mod common;

use common::{BAD_INPUT, CLIENT_ERRORS, OK_OR_NOT_FOUND, assert_route_echoes, client, expected};
use lifi_api_tests_rs::fixtures::{
    CUSTOM_EVM_WALLET_ADDRESS, INVALID_TOKENS, NEGATIVE_AMOUNT, TOKEN_PAIRS, ZERO_AMOUNT,
    primary_pair,
};
use lifi_api_tests_rs::{
    Order, OutcomeCategory, RouteOptions, RoutesRequest, addresses_match, expect_error_response,
    is_positive_amount,
};

#[tokio::test]
async fn test_routes_for_every_token_pair() {
    let client = client();

    for pair in TOKEN_PAIRS {
        println!("===== {} =====", pair.name);
        let outcome = client
            .advanced_routes(&pair.routes_request(), &expected(OK_OR_NOT_FOUND))
            .await
            .unwrap_or_else(|e| panic!("Routes for {} failed: {}", pair.name, e));

        if outcome.is_rate_limited {
            println!("Rate limited, moving on");
            continue;
        }

        match outcome.resource() {
            Some(response) => {
                println!("{} route(s) returned", response.routes.len());
                for route in &response.routes {
                    assert_route_echoes(pair, route);
                }
            }
            None => {
                let error = outcome.error().expect("404 should carry an error body");
                println!("No routes: {}", error.message);
            }
        }
    }
}

#[tokio::test]
async fn test_routes_respect_from_address() {
    let client = client();
    let request = RoutesRequest {
        from_address: Some(CUSTOM_EVM_WALLET_ADDRESS.to_string()),
        ..primary_pair().routes_request()
    };

    let outcome = client
        .advanced_routes(&request, &expected(&[200]))
        .await
        .unwrap();
    skip_if_rate_limited!(outcome, "routes with fromAddress");

    for route in &outcome.resource().unwrap().routes {
        if let Some(from_address) = route.from_address.as_deref() {
            assert!(addresses_match(from_address, CUSTOM_EVM_WALLET_ADDRESS));
        }
    }
}

#[tokio::test]
async fn test_routes_with_options() {
    let client = client();
    let request = RoutesRequest {
        options: Some(RouteOptions {
            slippage: Some(0.005),
            order: Some(Order::Cheapest),
            allow_destination_call: Some(true),
            ..Default::default()
        }),
        ..primary_pair().routes_request()
    };

    let outcome = client
        .advanced_routes(&request, &expected(OK_OR_NOT_FOUND))
        .await
        .unwrap();
    skip_if_rate_limited!(outcome, "routes with options");

    if let Some(response) = outcome.resource() {
        for route in &response.routes {
            assert_route_echoes(primary_pair(), route);
        }
    }
}

#[tokio::test]
async fn test_routes_invalid_token_address() {
    let client = client();
    let request = primary_pair().with_inputs_of(&INVALID_TOKENS[0]).routes_request();

    let outcome = expect_error_response(
        client.post_advanced_routes(&request).await.unwrap(),
        &expected(CLIENT_ERRORS),
    )
    .await
    .unwrap();
    println!("Status {}: {}", outcome.status, outcome.error.message);
    assert!(outcome.error.has_message());
}

#[tokio::test]
async fn test_routes_invalid_chain_id() {
    let client = client();
    let request = primary_pair().with_inputs_of(&INVALID_TOKENS[1]).routes_request();

    let outcome = expect_error_response(
        client.post_advanced_routes(&request).await.unwrap(),
        &expected(CLIENT_ERRORS),
    )
    .await
    .unwrap();
    assert!(outcome.error.has_message());
}

#[tokio::test]
async fn test_routes_zero_and_negative_amounts() {
    let client = client();

    for amount in [ZERO_AMOUNT, NEGATIVE_AMOUNT] {
        let request = primary_pair().with_amount(amount).routes_request();
        let outcome = client
            .advanced_routes(&request, &expected(BAD_INPUT))
            .await
            .unwrap_or_else(|e| panic!("Amount {} failed: {}", amount, e));

        if outcome.is_rate_limited {
            continue;
        }
        assert_eq!(outcome.category, OutcomeCategory::ClientError, "amount {}", amount);
        println!("Amount {}: {}", amount, outcome.error().unwrap().message);
    }
}

#[tokio::test]
async fn test_routes_missing_required_fields() {
    let client = client();
    let request = RoutesRequest::default();

    let outcome = expect_error_response(
        client.post_advanced_routes(&request).await.unwrap(),
        &expected(BAD_INPUT),
    )
    .await;
    assert!(outcome.is_ok(), "Expected 400/422, got {:?}", outcome.err());
}

#[tokio::test]
async fn test_routes_full_schema() {
    let client = client();
    let outcome = client
        .advanced_routes(&primary_pair().routes_request(), &expected(&[200]))
        .await
        .unwrap();
    skip_if_rate_limited!(outcome, "routes schema");

    let response = outcome.into_resource().unwrap();
    assert!(!response.routes.is_empty(), "Expected at least one route");

    for route in &response.routes {
        assert!(is_positive_amount(&route.to_amount));
        assert!(!route.to_amount_min.is_empty());
        for step in &route.steps {
            assert!(!step.id.is_empty());
            assert!(!step.tool.is_empty());
            assert!(!step.estimate.approval_address.is_empty());
        }
    }
}
