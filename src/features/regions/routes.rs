use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionCatalogService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionCatalogService>) -> Router {
    Router::new()
        // Province routes
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route("/api/regions/provinces/{code}", get(handlers::get_province))
        .route(
            "/api/regions/provinces/{code}/cities",
            get(handlers::list_cities_by_province),
        )
        // City routes
        .route("/api/regions/cities/{code}", get(handlers::get_city))
        .route(
            "/api/regions/cities/{code}/districts",
            get(handlers::list_districts_by_city),
        )
        // District routes
        .route("/api/regions/districts/{code}", get(handlers::get_district))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{failing_catalog_service, test_catalog_service};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        TestServer::new(routes(test_catalog_service())).unwrap()
    }

    #[tokio::test]
    async fn test_list_provinces_with_search() {
        let response = server()
            .get("/api/regions/provinces")
            .add_query_param("search", "jawa")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["JAWA BARAT", "JAWA TENGAH"]);
        assert_eq!(body["meta"]["total"], 2);
    }

    #[tokio::test]
    async fn test_list_cities_and_districts() {
        let server = server();

        let cities: Value = server.get("/api/regions/provinces/33/cities").await.json();
        assert_eq!(cities["meta"]["total"], 3);
        assert_eq!(cities["data"][0]["code"], "3301");
        assert_eq!(cities["data"][0]["provinceCode"], "33");

        let districts: Value = server.get("/api/regions/cities/3301/districts").await.json();
        assert_eq!(districts["meta"]["total"], 3);
        assert_eq!(districts["data"][0]["postalCode"], "53263");
    }

    #[tokio::test]
    async fn test_get_unknown_codes_return_not_found() {
        let server = server();
        server
            .get("/api/regions/provinces/99")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/api/regions/cities/3399")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/api/regions/districts/330199")
            .expect_failure()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_district() {
        let body: Value = server().get("/api/regions/districts/330101").await.json();
        assert_eq!(body["data"]["name"], "KEDUNGREJA");
        assert_eq!(body["data"]["cityCode"], "3301");
    }

    #[tokio::test]
    async fn test_unavailable_catalog_is_internal_error() {
        let server = TestServer::new(routes(failing_catalog_service())).unwrap();
        let response = server
            .get("/api/regions/provinces")
            .expect_failure()
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["message"], "Region catalog unavailable");
    }
}
