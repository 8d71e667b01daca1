mod common;

use actix_web::{http::StatusCode, middleware::NormalizePath, test, App};
use portfolio_api::{
    entities::project::{NewProject, ProjectCategory},
    routes::configure_routes,
};
use serde_json::{json, Value};

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .wrap(NormalizePath::trim())
                .configure(configure_routes),
        )
        .await
    };
}

// ── Projects ────────────────────────────────────────────────────

#[actix_web::test]
async fn list_projects_returns_seeded_catalog_in_priority_order() {
    let state = common::seeded_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let projects = body.as_array().expect("expected a JSON array");
    let slugs: Vec<&str> = projects
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(
        slugs,
        vec![
            "ai-business-incubator",
            "privacy-ai-chat",
            "content-automation",
            "sjl-bot",
            "job-detection",
            "rag-agent",
        ]
    );
}

#[actix_web::test]
async fn projects_are_sorted_by_priority_not_insertion_order() {
    let (storage, state) = common::empty_state();

    for (slug, priority) in [("three", 3), ("one", 1), ("two", 2)] {
        storage
            .create_project(NewProject {
                title: format!("Project {slug}"),
                slug: slug.to_string(),
                summary: "summary".to_string(),
                description: "description".to_string(),
                tech_stack: vec!["Rust".to_string()],
                category: ProjectCategory::Additional,
                image_url: "https://example.com/image.png".to_string(),
                repo_url: None,
                demo_url: None,
                featured: None,
                priority: Some(priority),
            })
            .await
            .unwrap();
    }

    let app = test_app!(state);
    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let priorities: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["priority"].as_i64().unwrap())
        .collect();
    assert_eq!(priorities, vec![1, 2, 3]);
}

#[actix_web::test]
async fn get_project_returns_camel_case_wire_format() {
    let state = common::seeded_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/projects/ai-business-incubator")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "AI-Powered Business Incubator");
    assert_eq!(body["category"], "featured");
    assert_eq!(body["featured"], true);
    assert_eq!(body["priority"], 1);
    assert_eq!(body["repoUrl"], Value::Null);
    assert_eq!(body["demoUrl"], Value::Null);
    assert!(body["techStack"].as_array().unwrap().contains(&json!("LangGraph")));
    assert!(body["imageUrl"].as_str().unwrap().starts_with("https://"));
    assert!(body["id"].is_i64());
}

#[actix_web::test]
async fn get_project_with_unknown_slug_returns_404() {
    let state = common::seeded_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/projects/nonexistent-slug")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Project not found");
}

#[actix_web::test]
async fn slug_lookup_is_case_sensitive() {
    let state = common::seeded_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/projects/RAG-Agent")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Skills ──────────────────────────────────────────────────────

#[actix_web::test]
async fn list_skills_returns_seeded_catalog() {
    let state = common::seeded_state().await;
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let skills = body.as_array().expect("expected a JSON array");
    assert_eq!(skills.len(), 6);
    assert_eq!(skills[0]["category"], "AI & ML");
    assert_eq!(skills[0]["icon"], "Brain");
    assert!(skills[0]["items"].as_array().unwrap().contains(&json!("RAG")));
}

#[actix_web::test]
async fn list_skills_on_empty_store_returns_empty_array() {
    let (_storage, state) = common::empty_state();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

// ── Contact ─────────────────────────────────────────────────────

#[actix_web::test]
async fn submit_contact_message_returns_201_acknowledgement() {
    let (_storage, state) = common::empty_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "message": "Hi"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully");
}

#[actix_web::test]
async fn missing_name_is_rejected_with_the_offending_field() {
    let (_storage, state) = common::empty_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "email": "jane@example.com",
            "message": "Hi"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "name");
    assert_eq!(body["message"], "Name is required");
}

#[actix_web::test]
async fn malformed_email_is_rejected_with_the_offending_field() {
    let (_storage, state) = common::empty_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Jane",
            "email": "not-an-email",
            "message": "Hi"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "email");
    assert_eq!(body["message"], "Invalid email address");
}

#[actix_web::test]
async fn missing_message_is_rejected_with_the_offending_field() {
    let (_storage, state) = common::empty_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Jane",
            "email": "jane@example.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "message");
    assert_eq!(body["message"], "Message is required");
}

#[actix_web::test]
async fn empty_body_reports_the_first_field() {
    let (_storage, state) = common::empty_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "name");
}

#[actix_web::test]
async fn malformed_json_payload_returns_400() {
    let (_storage, state) = common::empty_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Ambient endpoints ───────────────────────────────────────────

#[actix_web::test]
async fn home_describes_the_api() {
    let (_storage, state) = common::empty_state();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "Ok");
    assert!(body["version"].is_string());
}

#[actix_web::test]
async fn health_reports_in_memory_storage() {
    let (_storage, state) = common::empty_state();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "in-memory");
    assert_eq!(body["database"], "Not configured");
}
