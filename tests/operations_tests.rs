//! Per-operation facade tests: each operation hits its route with the
//! right method and body shape, and decodes its declared result type.

use sellerhub::models::{HighlightSection, Support};
use sellerhub::{
    Client, CreatePlanOptions, CreateProductOptions, Error, UpdateCatalogOptions,
    UpdatePlanOptions, UpdateProductOptions, UpdateSupportOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::builder()
        .base_url(server.uri())
        .unwrap()
        .build()
        .unwrap();
    (server, client)
}

fn ok(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

#[tokio::test]
async fn list_products_unwraps_the_named_array_field() {
    let (server, client) = client().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ok(json!({
            "products": [
                {"id": "p-1", "productName": "One"},
                {"id": "p-2", "productName": "Two"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client.list_products().await.unwrap().result.unwrap();
    assert_eq!(listing.products.len(), 2);
    assert_eq!(listing.products[1].id.as_deref(), Some("p-2"));
}

#[tokio::test]
async fn create_product_sends_the_declared_body() {
    let (server, client) = client().await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(json!({
            "productName": "My product",
            "taxAssessment": "SOFTWARE",
            "productType": "SOFTWARE",
            "materialAgreement": true
        })))
        .respond_with(ok(json!({"id": "p-1", "productName": "My product"})))
        .expect(1)
        .mount(&server)
        .await;

    let options =
        CreateProductOptions::new("My product", "SOFTWARE", "SOFTWARE").material_agreement(true);
    let created = client.create_product(&options).await.unwrap();
    assert_eq!(
        created.result.unwrap().id.as_deref(),
        Some("p-1")
    );
}

#[tokio::test]
async fn create_product_requires_its_fields() {
    let (server, client) = client().await;

    let options = CreateProductOptions::new("", "SOFTWARE", "SOFTWARE");
    let err = client.create_product(&options).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_product_patches_only_the_set_fields() {
    let (server, client) = client().await;

    Mock::given(method("PATCH"))
        .and(path("/products/p-1"))
        .and(body_json(json!({"productName": "Renamed"})))
        .respond_with(ok(json!({"id": "p-1", "productName": "Renamed"})))
        .expect(1)
        .mount(&server)
        .await;

    let options = UpdateProductOptions::new("p-1").product_name("Renamed");
    client.update_product(&options).await.unwrap();
}

#[tokio::test]
async fn lifecycle_operations_post_to_their_routes() {
    let (server, client) = client().await;
    let product = json!({"id": "p-1", "productName": "X"});

    for route in [
        "/products/p-1/publish",
        "/products/p-1/suspend",
        "/products/p-1/deprecate",
        "/products/p-1/restore",
    ] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ok(product.clone()))
            .expect(1)
            .mount(&server)
            .await;
    }

    client.publish_product("p-1").await.unwrap();
    client.suspend_product("p-1", "fraud review").await.unwrap();
    client.deprecate_product("p-1", "end of life").await.unwrap();
    client.restore_product("p-1", "resolved").await.unwrap();
}

#[tokio::test]
async fn suspend_requires_a_reason() {
    let (server, client) = client().await;

    let err = client.suspend_product("p-1", "").await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn badges_have_their_own_routes() {
    let (server, client) = client().await;

    Mock::given(method("GET"))
        .and(path("/products/badges"))
        .respond_with(ok(json!([{"id": "b-1", "label": "Security certified"}])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/badges/b-1"))
        .respond_with(ok(json!({
            "id": "b-1",
            "label": "Security certified",
            "learnMoreLinks": {"firstPartyDevelopers": "https://example.com/docs"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let badges = client.list_badges().await.unwrap().result.unwrap();
    assert_eq!(badges.len(), 1);

    let badge = client.get_badge("b-1").await.unwrap().result.unwrap();
    assert_eq!(badge.label.as_deref(), Some("Security certified"));
    assert_eq!(
        badge
            .learn_more_links
            .unwrap()
            .first_party_developers
            .as_deref(),
        Some("https://example.com/docs")
    );
}

#[tokio::test]
async fn catalog_update_sends_nested_sections() {
    let (server, client) = client().await;

    Mock::given(method("PATCH"))
        .and(path("/products/p-1/catalog"))
        .and(body_json(json!({
            "description": "short",
            "highlights": [{"title": "Fast", "description": "Very fast"}],
            "tags": ["analytics"]
        })))
        .respond_with(ok(json!({"id": "cat-1", "description": "short"})))
        .expect(1)
        .mount(&server)
        .await;

    let options = UpdateCatalogOptions::new("p-1")
        .description("short")
        .highlights(vec![HighlightSection {
            title: Some("Fast".into()),
            description: Some("Very fast".into()),
        }])
        .tags(vec!["analytics".into()]);
    let catalog = client.update_catalog(&options).await.unwrap();
    assert_eq!(catalog.result.unwrap().id.as_deref(), Some("cat-1"));
}

#[tokio::test]
async fn catalog_approval_returns_the_workflow_resource() {
    let (server, client) = client().await;

    Mock::given(method("POST"))
        .and(path("/products/p-1/catalog/approvals"))
        .respond_with(ok(json!({
            "id": "appr-1",
            "history": [{"at": "2022-03-01T10:00:00Z", "event": "submit"}],
            "nextEvents": ["approve", "reject"],
            "state": {"name": "waiting_for_approval"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = client
        .request_catalog_approval("p-1")
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(
        resource.state.and_then(|s| s.name),
        Some("waiting_for_approval".to_string())
    );
    assert_eq!(resource.next_events.unwrap().len(), 2);
}

#[tokio::test]
async fn plan_operations_cover_the_crud_routes() {
    let (server, client) = client().await;

    Mock::given(method("GET"))
        .and(path("/products/p-1/plans"))
        .respond_with(ok(json!({"plans": [{"id": "plan-1", "label": "Free"}]})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/products/p-1/plans"))
        .and(body_json(json!({
            "description": "Bring your own license",
            "label": "BYOL",
            "type": "byol",
            "url": "https://example.com/byol"
        })))
        .respond_with(ok(json!({"id": "plan-2", "type": "byol"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/p-1/plans/plan-2"))
        .respond_with(ok(json!({"id": "plan-2"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/products/p-1/plans/plan-2"))
        .and(body_json(json!({"label": "BYOL v2"})))
        .respond_with(ok(json!({"id": "plan-2", "label": "BYOL v2"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/products/p-1/plans/plan-2"))
        .respond_with(ok(json!({"id": "plan-2"})))
        .expect(1)
        .mount(&server)
        .await;

    let plans = client.list_plans("p-1").await.unwrap().result.unwrap();
    assert_eq!(plans.plans[0].label.as_deref(), Some("Free"));

    let created = client
        .create_plan(&CreatePlanOptions::new(
            "p-1",
            "Bring your own license",
            "BYOL",
            "byol",
            "https://example.com/byol",
        ))
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(created.plan_type.as_deref(), Some("byol"));

    client.get_plan("p-1", "plan-2").await.unwrap();
    client
        .update_plan(&UpdatePlanOptions::new("p-1", "plan-2").label("BYOL v2"))
        .await
        .unwrap();
    client.delete_plan("p-1", "plan-2").await.unwrap();
}

#[tokio::test]
async fn support_update_and_change_request_flow() {
    let (server, client) = client().await;
    let product = json!({"id": "p-1", "productName": "X"});

    Mock::given(method("GET"))
        .and(path("/products/p-1/support"))
        .respond_with(ok(json!({"supportType": "third-party", "url": "https://example.com"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/products/p-1/support"))
        .and(body_json(json!({
            "locations": ["US"],
            "supportType": "third-party",
            "url": "https://example.com/support"
        })))
        .respond_with(ok(json!({"supportType": "third-party"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/products/p-1/support/changes"))
        .and(body_json(json!({
            "change": {"supportType": "third-party", "url": "https://example.com/support-v2"}
        })))
        .respond_with(ok(product.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/p-1/support/changes"))
        .respond_with(ok(json!({
            "changes": [{"id": "cr-1", "state": {"name": "draft"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/p-1/support/changes/cr-1"))
        .respond_with(ok(json!({
            "id": "cr-1",
            "initial": false,
            "change": {"supportType": "third-party"},
            "state": {"name": "waiting_for_approval"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/products/p-1/support/changes/cr-1/reviews"))
        .respond_with(ok(json!({"id": "rev-1", "state": {"name": "in_review"}})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/products/p-1/support/changes/cr-1/merge"))
        .respond_with(ok(product.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let support = client.get_support("p-1").await.unwrap().result.unwrap();
    assert_eq!(support.support_type.as_deref(), Some("third-party"));

    let options = UpdateSupportOptions::new("p-1")
        .locations(vec!["US".into()])
        .support_type("third-party")
        .url("https://example.com/support");
    client.update_support(&options).await.unwrap();

    let change = Support {
        support_type: Some("third-party".into()),
        url: Some("https://example.com/support-v2".into()),
        ..Default::default()
    };
    client
        .create_support_change_request("p-1", &change)
        .await
        .unwrap();

    let changes = client
        .list_support_change_requests("p-1")
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(changes.changes[0].id.as_deref(), Some("cr-1"));

    let change_request = client
        .get_support_change_request("p-1", "cr-1")
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(change_request.initial, Some(false));

    client
        .request_support_change_request_review("p-1", "cr-1")
        .await
        .unwrap();
    client
        .merge_support_change_request("p-1", "cr-1")
        .await
        .unwrap();
}

#[tokio::test]
async fn approval_routes_return_workflow_resources() {
    let (server, client) = client().await;

    Mock::given(method("POST"))
        .and(path("/products/p-1/approvals"))
        .respond_with(ok(json!({"id": "appr-1", "state": {"name": "waiting_for_approval"}})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/products/p-1/approvals"))
        .respond_with(ok(json!({
            "approvals": [
                {"id": "appr-1", "state": {"name": "approved"}},
                {"id": "appr-2", "state": {"name": "waiting_for_approval"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/products/p-1/support/approvals"))
        .respond_with(ok(json!({"id": "appr-3", "state": {"name": "waiting_for_approval"}})))
        .expect(1)
        .mount(&server)
        .await;

    client.request_product_approval("p-1").await.unwrap();
    client.request_support_approval("p-1").await.unwrap();

    let approvals = client
        .list_product_approvals("p-1")
        .await
        .unwrap()
        .result
        .unwrap();
    assert_eq!(approvals.approvals.len(), 2);
    assert_eq!(
        approvals.approvals[0]
            .state
            .as_ref()
            .and_then(|s| s.name.as_deref()),
        Some("approved")
    );
}

#[tokio::test]
async fn change_request_operations_require_both_ids() {
    let (server, client) = client().await;

    let err = client
        .get_support_change_request("p-1", "")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = client
        .merge_support_change_request("", "cr-1")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
}
