mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{test_server, test_server_with_root};

#[tokio::test]
async fn test_list_catalog_recipes() {
    let server = test_server();

    let body: Value = server.get("/catalog/recipes").await.json();
    let recipes = body["data"].as_array().unwrap();
    assert_eq!(recipes.len(), 14);
    assert_eq!(recipes[0]["name"], "Spicy Tomato Rice with Crispy Bread Crumbs");
    assert_eq!(recipes[0]["yields"], "4 Servings");
}

#[tokio::test]
async fn test_get_catalog_recipe_by_name() {
    let server = test_server();

    let response = server.get("/catalog/recipes/Pumpkin%20Risotto").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["prep_time"], "10 minutes");

    server
        .get("/catalog/recipes/Beef%20Wellington")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_schedule_and_daily_menu() {
    let server = test_server();

    let schedule: Value = server.get("/catalog/schedule").await.json();
    let days = schedule["data"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[6]["day"], "Sunday");
    assert_eq!(days[6]["recipes"][1], "Pumpkin Risotto");

    let response = server
        .get("/catalog/today")
        .add_query_param("day", "Thursday")
        .await;
    response.assert_status_ok();
    let menu: Value = response.json();
    assert_eq!(menu["data"]["day"], "Thursday");
    assert_eq!(menu["data"]["recipes"][0]["status"], "available");
    assert_eq!(
        menu["data"]["recipes"][1]["name"],
        "Peanut Butter Fried Rice"
    );

    server
        .get("/catalog/today")
        .await
        .assert_status_ok();

    server
        .get("/catalog/today")
        .add_query_param("day", "Someday")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_routes_honor_root_path() {
    let server = test_server_with_root("/api");

    server.get("/api/catalog/schedule").await.assert_status_ok();
    server.get("/api/health").await.assert_status_ok();
    server
        .get("/catalog/schedule")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let docs: Value = server.get("/api/api-docs/openapi.json").await.json();
    assert!(docs["paths"]["/api/sessions/{session_id}/shelf"].is_object());
}
