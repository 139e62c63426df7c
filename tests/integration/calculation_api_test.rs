// Integration tests for the calculation endpoints
//
// Runs the full application configuration (routes, JSON config, request ID
// middleware) in-process through actix-web's test service.

use actix_web::{test, web, App};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use profit_analyzer::middleware::{json_error_handler, RequestId};
use profit_analyzer::modules;

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .wrap(RequestId)
                .app_data(
                    web::JsonConfig::default()
                        .limit(4096)
                        .error_handler(json_error_handler),
                )
                .configure(modules::configure),
        )
        .await
    };
}

fn icms_form() -> Value {
    json!({
        "product_name": "Caneca",
        "product_value": "150",
        "quantity": "10",
        "taxes": [
            { "id": "tax-1", "name": "ICMS", "rate": "18", "base": "GROSS" }
        ],
        "costs": [
            { "id": "cost-1", "name": "Frete", "value": "10", "kind": "FIXED" },
            { "id": "cost-2", "name": "Embalagem", "value": "2", "kind": "VARIABLE" }
        ]
    })
}

/// Decimals are serialized as strings
fn decimal(value: &Value) -> rust_decimal::Decimal {
    value.as_str().unwrap().parse().unwrap()
}

#[actix_web::test]
async fn test_calculate_end_to_end() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/calculations")
        .set_json(icms_form())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let result = &body["result"];

    assert_eq!(result["product_name"], "Caneca");
    assert_eq!(result["quantity"], 10);
    assert_eq!(decimal(&result["total_tax_per_unit"]), dec!(27));
    assert_eq!(decimal(&result["total_cost_per_unit"]), dec!(30));
    assert_eq!(decimal(&result["net_profit_per_unit"]), dec!(120));
    assert_eq!(decimal(&result["net_profit_total"]), dec!(1200));
    assert_eq!(decimal(&result["margin_percent"]), dec!(80));

    let tax = &result["calculated_taxes"][0];
    assert_eq!(tax["name"], "ICMS");
    assert_eq!(tax["base"], "GROSS");
    assert_eq!(tax["base_label"], "Gross value");
    assert_eq!(decimal(&tax["base_amount_used"]), dec!(150));
    assert_eq!(decimal(&tax["total_amount"]), dec!(270));

    let fixed = &result["calculated_costs"][0];
    assert_eq!(fixed["kind"], "FIXED");
    assert_eq!(decimal(&fixed["per_unit_amount"]), dec!(1));
    assert_eq!(decimal(&fixed["total_amount"]), dec!(10));

    let slices = body["breakdown"]["unit_composition"].as_array().unwrap();
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0]["label"], "Taxes");
    assert_eq!(decimal(&body["breakdown"]["totals"]["gross"]), dec!(1500));
}

#[actix_web::test]
async fn test_calculate_rejects_invalid_form() {
    let app = test_app!();

    let mut form = icms_form();
    form["quantity"] = json!("0");
    form["taxes"][0]["rate"] = json!("18.555");

    let req = test::TestRequest::post()
        .uri("/calculations")
        .set_json(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);

    let fields: Vec<&str> = body["error"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["quantity", "taxes[0].rate"]);
}

#[actix_web::test]
async fn test_calculate_out_of_range_amounts() {
    let app = test_app!();

    let mut form = icms_form();
    form["product_value"] = json!("1000000000000");
    form["quantity"] = json!("1000000000");
    form["taxes"][0]["rate"] = json!("1000000000000");

    let req = test::TestRequest::post()
        .uri("/calculations")
        .set_json(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 422);
    assert!(body["error"]["fields"].is_null());
}

#[actix_web::test]
async fn test_validate_returns_typed_input() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/calculations/validate")
        .set_json(json!({
            "product_name": " Caneca ",
            "product_value": "19.90",
            "quantity": "3",
            "taxes": [{ "name": "IPI", "rate": "5", "base": "valueWithTaxes" }],
            "costs": [{ "name": "Frete", "value": "7.5", "type": "fixed" }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["product_name"], "Caneca");
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["taxes"][0]["id"], "tax-1");
    assert_eq!(body["taxes"][0]["base"], "ACCUMULATED");
    assert_eq!(body["costs"][0]["kind"], "FIXED");
}

#[actix_web::test]
async fn test_template_is_served() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/calculations/template")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["quantity"], "1");
    assert_eq!(body["taxes"][0]["name"], "ICMS");
    assert_eq!(body["costs"][1]["kind"], "VARIABLE");
}

#[actix_web::test]
async fn test_malformed_and_oversized_bodies() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/calculations")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"product_name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let mut form = icms_form();
    form["product_name"] = json!("x".repeat(8192));
    let req = test::TestRequest::post()
        .uri("/calculations")
        .set_json(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("exceeds 4096 bytes"));
}

#[actix_web::test]
async fn test_response_carries_request_id() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/calculations")
        .insert_header(("X-Request-ID", "calc-42"))
        .set_json(icms_form())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("x-request-id").unwrap(), "calc-42");
}
