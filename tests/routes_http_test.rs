// ABOUTME: HTTP-level tests for every route through the composed axum router
// ABOUTME: Exercises status codes, JSON bodies, and bearer authentication with oneshot requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use common::{init_test_logging, meal, plan_of, test_resources, StubGateway};
use mealplanner_server::database::{InMemoryUserStore, UserStore};
use mealplanner_server::external::MealPlanGateway;
use mealplanner_server::resources::ServerResources;
use mealplanner_server::server::build_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    resources: Arc<ServerResources>,
}

impl TestApp {
    fn new(gateway: Arc<dyn MealPlanGateway>) -> Self {
        init_test_logging();
        let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        let resources = test_resources(store, gateway);
        Self {
            router: build_router(Arc::clone(&resources)),
            resources,
        }
    }

    fn with_default_plan() -> Self {
        Self::new(Arc::new(StubGateway::with_plan(plan_of(vec![
            meal(1, "Breakfast"),
            meal(2, "Lunch"),
            meal(3, "Dinner"),
        ]))))
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn register_and_login(&self, username: &str) -> String {
        let (status, _) = self
            .send("POST", "/register", None, Some(registration(username)))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .send(
                "POST",
                "/login",
                None,
                Some(json!({"username": username, "password": "password123"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_owned()
    }
}

fn registration(username: &str) -> Value {
    json!({
        "username": username,
        "password": "password123",
        "email": format!("{username}@example.com"),
        "full_name": "Jane Doe",
        "birth_date": "1995-06-15",
        "gender": "female",
        "weight": 60.0,
        "height": 165.0,
        "activity_level": "sedentary"
    })
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::with_default_plan();
    let (status, body) = app.send("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_register_login_profile_and_meal_plan() {
    let app = TestApp::with_default_plan();

    let (status, user) = app
        .send("POST", "/register", None, Some(registration("jane")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["username"], "jane");
    assert_eq!(user["gender"], "female");
    assert_eq!(user["birth_date"], "1995-06-15");
    assert!(user.get("password_hash").is_none());
    assert!(user.get("password").is_none());

    let (status, login) = app
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"username": "jane", "password": "password123"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["token"].as_str().unwrap().to_owned();
    assert!(login["expires_at"].is_string());

    let (status, profile) = app.send("GET", "/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["username"], "jane");
    assert_eq!(profile["weight"], 60.0);
    assert!(profile["age"].as_i64().unwrap() >= 29);
    assert!(profile["daily_calorie_required"].as_f64().unwrap() > 1000.0);

    let (status, plan) = app
        .send("GET", "/mealplan/generate", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["meals"].as_array().unwrap().len(), 3);
    assert_eq!(plan["meals"][0]["meal"]["id"], 1);
    assert_eq!(plan["meals"][0]["recipe"]["id"], 1);
    assert!(plan["target_calories"].as_f64().unwrap() > 0.0);
    assert!(plan["requested_calories"].as_u64().unwrap() > 0);
    assert_eq!(plan["nutrients"]["calories"], 1650.0);

    let (status, body) = app.send("POST", "/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::with_default_plan();
    let (status, _) = app
        .send("POST", "/register", None, Some(registration("sam")))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .send("POST", "/register", None, Some(registration("sam")))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_registration_validation_errors() {
    let app = TestApp::with_default_plan();

    let mut bad_email = registration("a");
    bad_email["email"] = json!("not-an-email");
    let mut short_password = registration("b");
    short_password["password"] = json!("short");
    let mut bad_date = registration("c");
    bad_date["birth_date"] = json!("15/06/1995");
    let mut zero_weight = registration("d");
    zero_weight["weight"] = json!(0);
    let mut missing_gender = registration("e");
    missing_gender.as_object_mut().unwrap().remove("gender");

    for body in [bad_email, short_password, bad_date, zero_weight, missing_gender] {
        let (status, response) = app.send("POST", "/register", None, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{response}");
        assert_eq!(response["error"]["code"], "INVALID_INPUT");
    }
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::with_default_plan();
    app.register_and_login("kim").await;

    let (status, wrong_password) = app
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"username": "kim", "password": "wrong-password"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown_user) = app
        .send(
            "POST",
            "/login",
            None,
            Some(json!({"username": "nobody", "password": "password123"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        wrong_password["error"]["message"],
        unknown_user["error"]["message"]
    );
}

#[tokio::test]
async fn test_protected_routes_require_valid_token() {
    let app = TestApp::with_default_plan();

    for (method, uri) in [
        ("GET", "/user"),
        ("PUT", "/user"),
        ("GET", "/mealplan/generate"),
        ("POST", "/logout"),
    ] {
        let (status, _) = app.send(method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");

        let (status, _) = app.send(method, uri, Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_partial_profile_update() {
    let app = TestApp::with_default_plan();
    let token = app.register_and_login("lee").await;

    let (status, body) = app
        .send(
            "PUT",
            "/user",
            Some(&token),
            Some(json!({"weight": 72.5, "activity_level": "very active", "email": ""})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, profile) = app.send("GET", "/user", Some(&token), None).await;
    assert_eq!(profile["weight"], 72.5);
    assert_eq!(profile["height"], 165.0);
    assert_eq!(profile["activity_level"], "very active");
    assert_eq!(profile["email"], "lee@example.com");

    let (status, _) = app
        .send(
            "PUT",
            "/user",
            Some(&token),
            Some(json!({"birth_date": "not-a-date"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_meal_plan_for_missing_user_is_not_found() {
    let app = TestApp::with_default_plan();
    let issued = app.resources.auth_manager.generate_token("ghost").unwrap();

    let (status, body) = app
        .send("GET", "/mealplan/generate", Some(&issued.token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_meal_plan_upstream_failure_is_server_error() {
    let gateway = Arc::new(StubGateway::failing_plan());
    let app = TestApp::new(Arc::clone(&gateway) as Arc<dyn MealPlanGateway>);
    let token = app.register_and_login("max").await;

    let (status, body) = app
        .send("GET", "/mealplan/generate", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
    assert!(gateway.detail_calls().is_empty());
}

#[tokio::test]
async fn test_meal_plan_drops_meal_whose_detail_fails() {
    let gateway = Arc::new(
        StubGateway::with_plan(plan_of(vec![
            meal(1, "Breakfast"),
            meal(2, "Lunch"),
            meal(3, "Dinner"),
        ]))
        .fail_detail(2),
    );
    let app = TestApp::new(Arc::clone(&gateway) as Arc<dyn MealPlanGateway>);
    let token = app.register_and_login("ida").await;

    let (status, plan) = app
        .send("GET", "/mealplan/generate", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = plan["meals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["meal"]["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(gateway.detail_calls(), vec![1, 2, 3]);
}
