//! Router tests against an in-memory database.
//!
//! Each test builds the full application stack and drives it with `oneshot`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use taskboard_backend::{
    app::{create_app, AppState},
    config::Settings,
    db,
    store::Store,
};

async fn test_app() -> Router {
    let settings = Settings::in_memory();
    let pool = db::create_pool(&settings).await.unwrap();
    db::run_migrations(&pool).await.unwrap();
    create_app(AppState::new(Store::new(pool), settings))
}

async fn send(app: &Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn create_mission_redirects_to_list() {
    let app = test_app().await;

    let response = post_form(&app, "/missions/new", "title=M1&description=desc&tag_id=").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/missions");

    let json = body_json(send(&app, Method::GET, "/missions").await).await;
    let missions = json["data"]["missions"].as_array().unwrap();
    assert_eq!(missions.len(), 1);
    assert_eq!(missions[0]["title"], "M1");
    assert_eq!(missions[0]["tag_id"], Value::Null);
}

#[tokio::test]
async fn mission_with_missing_tag_is_not_found() {
    let app = test_app().await;

    let response = post_form(&app, "/missions/new", "title=M1&tag_id=5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let response = post_form(&app, "/missions/new", "title=M1&tag_id=five").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn tag_form_lists_colors_and_rejects_unknown_codes() {
    let app = test_app().await;

    let json = body_json(send(&app, Method::GET, "/tags/new").await).await;
    assert_eq!(json["data"]["colors"]["RED"], 1);
    assert_eq!(json["data"]["colors"]["GRAY"], 7);

    let response = post_form(&app, "/tags/new", "name=urgent&color_id=42").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let response = post_form(&app, "/tags/new", "name=urgent&color_id=red").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_form(&app, "/tags/new", "name=urgent&color_id=1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/missions");

    let json = body_json(send(&app, Method::GET, "/missions/new").await).await;
    let tags = json["data"]["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0]["name"], "urgent");
    assert_eq!(tags[0]["color"], "RED");
}

#[tokio::test]
async fn task_board_groups_by_status() {
    let app = test_app().await;
    post_form(&app, "/missions/new", "title=M1").await;

    for title in ["a", "b", "c"] {
        let response = post_form(&app, "/tasks/new", &format!("title={title}&mission_id=1")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/tasks?mission_id=1");
    }

    let response = send(&app, Method::GET, "/tasks/2/set_status/in_progress").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/tasks");

    let json = body_json(send(&app, Method::GET, "/tasks?mission_id=1").await).await;
    assert_eq!(json["data"]["mission"]["title"], "M1");
    let groups = json["data"]["tasks"].as_object().unwrap();
    let todo: Vec<&str> = groups["TODO"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(todo, vec!["a", "c"]);
    assert_eq!(groups["IN_PROGRESS"][0]["title"], "b");
    assert!(!groups.contains_key("DONE"));
}

#[tokio::test]
async fn task_board_requires_a_mission() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/tasks").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/missions");

    let response = send(&app, Method::GET, "/tasks?mission_id=9").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn task_for_missing_mission_is_not_found() {
    let app = test_app().await;

    let response = post_form(&app, "/tasks/new", "title=T1&mission_id=3").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_form(&app, "/tasks/new", "title=T1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn show_and_edit_task() {
    let app = test_app().await;
    post_form(&app, "/missions/new", "title=M1").await;
    post_form(&app, "/tasks/new", "title=T1&description=old&mission_id=1").await;

    let json = body_json(send(&app, Method::GET, "/tasks/1").await).await;
    assert_eq!(json["data"]["task"]["status"], "TODO");
    assert_eq!(json["data"]["task"]["mission_id"], 1);

    let json = body_json(send(&app, Method::GET, "/tasks/1/edit").await).await;
    assert_eq!(json["data"]["task"]["description"], "old");

    let response = post_form(&app, "/tasks/1/edit", "title=T1+renamed&description=new").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/tasks?mission_id=1");

    let json = body_json(send(&app, Method::GET, "/tasks/1").await).await;
    assert_eq!(json["data"]["task"]["title"], "T1 renamed");
    assert_eq!(json["data"]["task"]["status"], "TODO");

    assert_eq!(
        send(&app, Method::GET, "/tasks/99").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        post_form(&app, "/tasks/99/edit", "title=x").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn invalid_status_is_bad_request() {
    let app = test_app().await;
    post_form(&app, "/missions/new", "title=M1").await;
    post_form(&app, "/tasks/new", "title=T1&mission_id=1").await;

    let response = send(&app, Method::GET, "/tasks/1/set_status/someday").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(send(&app, Method::GET, "/tasks/1").await).await;
    assert_eq!(json["data"]["task"]["status"], "TODO");

    let response = send(&app, Method::GET, "/tasks/50/set_status/done").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_task_returns_board_url() {
    let app = test_app().await;
    post_form(&app, "/missions/new", "title=M1").await;
    post_form(&app, "/tasks/new", "title=T1&mission_id=1").await;

    let response = send(&app, Method::DELETE, "/tasks/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "/tasks?mission_id=1");

    assert_eq!(
        send(&app, Method::DELETE, "/tasks/1").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn mission_lifecycle_over_http() {
    let app = test_app().await;
    post_form(&app, "/missions/new", "title=M1&description=desc").await;
    post_form(&app, "/tasks/new", "title=T1&mission_id=1").await;

    let json = body_json(send(&app, Method::GET, "/tasks/1").await).await;
    assert_eq!(json["data"]["task"]["status"], "TODO");

    send(&app, Method::GET, "/tasks/1/set_status/done").await;
    let json = body_json(send(&app, Method::GET, "/tasks/1").await).await;
    assert_eq!(json["data"]["task"]["status"], "DONE");

    let response = send(&app, Method::DELETE, "/missions/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "/missions");

    assert_eq!(
        send(&app, Method::GET, "/tasks/1").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        send(&app, Method::DELETE, "/missions/1").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn log_records_creations() {
    let app = test_app().await;
    post_form(&app, "/missions/new", "title=Apollo").await;
    post_form(&app, "/tasks/new", "title=Liftoff&mission_id=1").await;

    let json = body_json(send(&app, Method::GET, "/log").await).await;
    let entries = json["data"]["log_entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["message"], "Mission \"Apollo\" was created");
    assert_eq!(
        entries[1]["message"],
        "Task \"Liftoff\" was created in mission #1"
    );
}

#[tokio::test]
async fn responses_carry_request_id_and_health() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["services"]["database"], "ok");
}

#[tokio::test]
async fn future_page_is_static_and_linked() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/future").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Coming soon");

    let json = body_json(send(&app, Method::GET, "/").await).await;
    let links = json["links"].as_array().unwrap();
    assert!(links.iter().any(|link| link == "/future"));
}

#[tokio::test]
async fn non_integer_path_ids_are_json_not_found() {
    let app = test_app().await;

    for (method, uri) in [
        (Method::GET, "/tasks/abc"),
        (Method::GET, "/tasks/abc/edit"),
        (Method::GET, "/tasks/abc/set_status/done"),
        (Method::DELETE, "/tasks/1.5"),
        (Method::DELETE, "/missions/abc"),
    ] {
        let response = send(&app, method, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "{uri}"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND", "{uri}");
    }

    let response = post_form(&app, "/tasks/abc/edit", "title=x").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
