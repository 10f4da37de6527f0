mod common;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use common::memory_storage;
use rust_evalsys::routes;
use rust_evalsys::utils::{json_error_handler, jwt::JwtUtils};

fn bearer(user_id: i64, role: &str) -> (&'static str, String) {
    let token = JwtUtils::generate_access_token(user_id, role).unwrap();
    ("Authorization", format!("Bearer {token}"))
}

macro_rules! app {
    () => {{
        let storage = memory_storage().await;
        test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(routes::configure_evaluation_policies_routes)
                .configure(routes::configure_evaluation_systems_routes)
                .configure(routes::configure_evaluation_items_routes)
                .configure(routes::configure_subjects_routes)
                .configure(routes::configure_courses_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn requests_without_token_are_unauthorized() {
    let app = app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/evaluation-policies/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1002);
}

#[actix_web::test]
async fn students_cannot_write_policies() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/evaluation-policies")
        .insert_header(bearer(3, "student"))
        .set_json(json!({ "subject_id": 1, "policy_rules": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn policy_lifecycle_over_http() {
    let app = app!();
    let payload = json!({
        "subject_id": 5,
        "policy_rules": [
            { "evaluation_type_id": 1, "min_percentage": 20.0, "max_percentage": 60.0 }
        ]
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/evaluation-policies")
        .insert_header(bearer(1, "admin"))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    let policy_id = body["data"]["id"].as_i64().unwrap();

    // 重复创建按冲突返回 400
    let req = test::TestRequest::post()
        .uri("/api/v1/evaluation-policies")
        .insert_header(bearer(1, "admin"))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2001);

    // 学生可以读取
    let req = test::TestRequest::get()
        .uri("/api/v1/evaluation-policies/subject/5")
        .insert_header(bearer(3, "student"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], policy_id);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/evaluation-policies/{policy_id}"))
        .insert_header(bearer(1, "admin"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/evaluation-policies/{policy_id}"))
        .insert_header(bearer(1, "admin"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2000);
}

#[actix_web::test]
async fn malformed_requests_are_rejected() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/evaluation-policies")
        .insert_header(bearer(1, "admin"))
        .set_json(json!({ "subject_id": 1, "policy_rules": [], "extra": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1001);

    let req = test::TestRequest::get()
        .uri("/api/v1/evaluation-policies/not-a-number")
        .insert_header(bearer(1, "admin"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/groups/0/evaluation-items")
        .insert_header(bearer(1, "admin"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn professors_sync_group_items() {
    let app = app!();
    let payload = json!({
        "items": [
            { "evaluation_system_id": 1, "evaluation_type_id": 1, "name": "Midterm", "weight": 40.0 },
            { "evaluation_system_id": 1, "evaluation_type_id": 1, "name": "Final", "weight": 60.0, "min_grade": 5.0 }
        ]
    });

    let req = test::TestRequest::put()
        .uri("/api/v1/groups/7/evaluation-items")
        .insert_header(bearer(2, "professor"))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["created_count"], 2);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);

    // 学生只能读取
    let req = test::TestRequest::put()
        .uri("/api/v1/groups/7/evaluation-items")
        .insert_header(bearer(3, "student"))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri("/api/v1/groups/7/evaluation-items")
        .insert_header(bearer(3, "student"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // 新条目彼此重名
    let req = test::TestRequest::put()
        .uri("/api/v1/groups/8/evaluation-items")
        .insert_header(bearer(2, "professor"))
        .set_json(json!({
            "items": [
                { "evaluation_system_id": 1, "evaluation_type_id": 1, "name": "A", "weight": 50.0 },
                { "evaluation_system_id": 1, "evaluation_type_id": 1, "name": "A", "weight": 50.0 }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 4001);
}

#[actix_web::test]
async fn owner_workflow_enforces_subject_policy() {
    let app = app!();

    let req = test::TestRequest::put()
        .uri("/api/v1/subjects/1")
        .insert_header(bearer(1, "admin"))
        .set_json(json!({ "name": "Algebra" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/subjects/1/evaluation-policy")
        .insert_header(bearer(1, "admin"))
        .set_json(json!({
            "policy_rules": [
                { "evaluation_type_id": 1, "min_percentage": 20.0, "max_percentage": 60.0 },
                { "evaluation_type_id": 2, "min_percentage": 40.0, "max_percentage": 80.0 }
            ]
        }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::put()
        .uri("/api/v1/courses/10")
        .insert_header(bearer(1, "admin"))
        .set_json(json!({ "subject_id": 1, "name": "Algebra 2026" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/v1/courses/10/evaluation-system")
        .insert_header(bearer(2, "professor"))
        .set_json(json!({
            "evaluation_groups": [
                { "evaluation_type_id": 1, "total_weight": 70.0 },
                { "evaluation_type_id": 2, "total_weight": 30.0 }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3002);

    let req = test::TestRequest::post()
        .uri("/api/v1/courses/10/evaluation-system")
        .insert_header(bearer(2, "professor"))
        .set_json(json!({
            "evaluation_groups": [
                { "evaluation_type_id": 1, "total_weight": 40.0 },
                { "evaluation_type_id": 2, "total_weight": 60.0 }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["course_id"], 10);

    let req = test::TestRequest::post()
        .uri("/api/v1/courses/99/evaluation-system")
        .insert_header(bearer(2, "professor"))
        .set_json(json!({
            "evaluation_groups": [{ "evaluation_type_id": 1, "total_weight": 100.0 }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 5001);
}
