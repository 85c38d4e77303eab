//! Storefront client tests against a mock GraphQL endpoint.

use merch_catalog::TagProfile;
use merch_core::{Region, RegionProfile};
use merch_storefront::{StorefrontClient, StorefrontError, ACCESS_TOKEN_HEADER};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> StorefrontClient {
    StorefrontClient::new(RegionProfile::for_region(Region::Au)).with_endpoint(server.uri())
}

fn search_body(nodes: serde_json::Value) -> serde_json::Value {
    json!({"data": {"products": {"nodes": nodes}}})
}

#[tokio::test]
async fn sends_access_token_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header(ACCESS_TOKEN_HEADER, "adf030af27addd2acf6906f4b810d150"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let products = client.color_siblings("handle-rep-tight", "AU").await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn parses_sibling_products() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(json!([{
            "id": "gid://shopify/Product/111",
            "title": "Rep Tight - Black",
            "tags": ["handle-rep-tight", "colourSwatch:Black|#000000"],
            "availableForSale": true,
            "priceRange": {"minVariantPrice": {"amount": "79.99", "currencyCode": "AUD"}},
            "variants": {"nodes": [{
                "id": "gid://shopify/ProductVariant/222",
                "availableForSale": true,
                "selectedOptions": [{"name": "Size", "value": "S"}],
            }]},
        }]))))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let products = client.color_siblings("handle-rep-tight", "AU").await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id.as_str(), "111");
    assert_eq!(products[0].min_price.as_ref().unwrap().amount, 79.99);
    assert_eq!(products[0].variants[0].option_value("Size"), Some("S"));
}

#[tokio::test]
async fn graphql_errors_surface() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Field 'productz' doesn't exist"}],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.color_siblings("handle-x", "AU").await;
    assert!(matches!(result, Err(StorefrontError::Graphql(_))));
}

#[tokio::test]
async fn non_success_status_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.color_siblings("handle-x", "AU").await;
    assert!(matches!(
        result,
        Err(StorefrontError::Status { status: 502 })
    ));
}

#[tokio::test]
async fn malformed_body_surfaces_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.color_siblings("handle-x", "AU").await;
    assert!(matches!(result, Err(StorefrontError::Decode(_))));
}

#[tokio::test]
async fn sibling_sets_skip_missing_axes() {
    let server = MockServer::start().await;
    // No mock mounted: any network call would fail the fetch. A profile
    // with no grouping tags must not hit the network at all.
    let client = client_for(&server);

    let tags = TagProfile::decode::<&str>(&[]);
    let sets = client.sibling_sets(&tags, "AU").await.unwrap();
    assert!(sets.colors.is_empty());
    assert!(sets.groups.is_empty());
}

#[tokio::test]
async fn size_guide_returns_page_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"page": {"body": "<table>sizes</table>"}},
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client
        .size_guide("SizeChart_womens-tights", "AU")
        .await
        .unwrap();
    assert_eq!(body.as_deref(), Some("<table>sizes</table>"));
}

#[tokio::test]
async fn size_guide_missing_page_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"page": null}})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.size_guide("SizeChart_missing", "AU").await.unwrap();
    assert_eq!(body, None);
}
