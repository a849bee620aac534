//! End-to-end tests for the full hbnbd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use hbnb_adapter_http_axum::router::{self, App};
use hbnb_adapter_http_axum::state::AppState;
use hbnb_adapter_storage_sqlite_sqlx::{
    Config, SqliteAmenityRepository, SqliteCityRepository, SqlitePlaceRepository,
    SqliteReviewRepository, SqliteStateRepository, SqliteUserRepository,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build the fully-wired application backed by an in-memory `SQLite` database.
async fn app() -> App {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::from_repositories(
        SqliteStateRepository::new(pool.clone()),
        SqliteCityRepository::new(pool.clone()),
        SqliteAmenityRepository::new(pool.clone()),
        SqliteUserRepository::new(pool.clone()),
        SqlitePlaceRepository::new(pool.clone()),
        SqliteReviewRepository::new(pool),
    );

    router::build(state)
}

async fn call(app: &App, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn created(app: &App, uri: &str, body: Value) -> Value {
    let (status, json) = call(app, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri} -> {json}");
    json
}

fn id_of(json: &Value) -> &str {
    json["id"].as_str().unwrap()
}

/// One of each resource, linked together.
struct World {
    state: Value,
    city: Value,
    amenity: Value,
    user: Value,
    place: Value,
    review: Value,
}

async fn populate(app: &App) -> World {
    let state = created(app, "/api/v1/states", json!({"name": "California"})).await;
    let city = created(
        app,
        &format!("/api/v1/states/{}/cities", id_of(&state)),
        json!({"name": "San Francisco"}),
    )
    .await;
    let amenity = created(app, "/api/v1/amenities", json!({"name": "Wifi"})).await;
    let user = created(
        app,
        "/api/v1/users",
        json!({"email": "host@example.com", "password": "pw", "first_name": "Ada"}),
    )
    .await;
    let place = created(
        app,
        &format!("/api/v1/cities/{}/places", id_of(&city)),
        json!({"user_id": id_of(&user), "name": "Loft", "price_by_night": 120}),
    )
    .await;
    let review = created(
        app,
        &format!("/api/v1/places/{}/reviews", id_of(&place)),
        json!({"user_id": id_of(&user), "text": "Lovely"}),
    )
    .await;

    World {
        state,
        city,
        amenity,
        user,
        place,
        review,
    }
}

// ---------------------------------------------------------------------------
// Status and stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_status_ok() {
    let app = app().await;
    let (status, body) = call(&app, "GET", "/api/v1/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK"}));
}

#[tokio::test]
async fn should_count_one_of_each_after_populating() {
    let app = app().await;
    let (_, before) = call(&app, "GET", "/api/v1/stats", None).await;
    assert_eq!(
        before,
        json!({"amenities": 0, "cities": 0, "places": 0, "reviews": 0, "states": 0, "users": 0})
    );

    populate(&app).await;

    let (status, after) = call(&app, "GET", "/api/v1/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        after,
        json!({"amenities": 1, "cities": 1, "places": 1, "reviews": 1, "states": 1, "users": 1})
    );
}

// ---------------------------------------------------------------------------
// CRUD lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_run_state_lifecycle() {
    let app = app().await;

    let state = created(&app, "/api/v1/states", json!({"name": "California"})).await;
    assert_eq!(state["name"], "California");
    assert_eq!(state["__class__"], "State");
    assert!(!id_of(&state).is_empty());

    let uri = format!("/api/v1/states/{}", id_of(&state));
    let (status, fetched) = call(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, state);

    let (status, listed) = call(&app, "GET", "/api/v1/states", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([state]));

    let (status, body) = call(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body) = call(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

#[tokio::test]
async fn should_return_not_found_after_delete_for_every_resource() {
    let app = app().await;
    let world = populate(&app).await;

    for (collection, json) in [
        ("reviews", &world.review),
        ("places", &world.place),
        ("amenities", &world.amenity),
        ("cities", &world.city),
        ("users", &world.user),
        ("states", &world.state),
    ] {
        let uri = format!("/api/v1/{collection}/{}", id_of(json));
        let (status, _) = call(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");

        let (status, body) = call(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK, "DELETE {uri}");
        assert_eq!(body, json!({}));

        let (status, _) = call(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri} after delete");

        let (status, _) = call(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "second DELETE {uri}");
    }
}

#[tokio::test]
async fn should_never_expose_user_password() {
    let app = app().await;
    let world = populate(&app).await;

    assert!(world.user.get("password").is_none());
    assert_eq!(world.user["email"], "host@example.com");
    assert_eq!(world.user["__class__"], "User");

    let (_, listed) = call(&app, "GET", "/api/v1/users", None).await;
    assert!(listed[0].get("password").is_none());
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_missing_required_fields_without_storing() {
    let app = app().await;
    let world = populate(&app).await;
    let (_, before) = call(&app, "GET", "/api/v1/stats", None).await;

    let state_cities = format!("/api/v1/states/{}/cities", id_of(&world.state));
    let city_places = format!("/api/v1/cities/{}/places", id_of(&world.city));
    let place_reviews = format!("/api/v1/places/{}/reviews", id_of(&world.place));
    let user_id = id_of(&world.user);

    let cases = [
        ("/api/v1/states", json!({}), "Missing name"),
        (state_cities.as_str(), json!({"label": "x"}), "Missing name"),
        ("/api/v1/amenities", json!({}), "Missing name"),
        ("/api/v1/users", json!({"password": "pw"}), "Missing email"),
        ("/api/v1/users", json!({"email": "a@b.c"}), "Missing password"),
        (city_places.as_str(), json!({"name": "Loft"}), "Missing user_id"),
        (city_places.as_str(), json!({"user_id": user_id}), "Missing name"),
        (place_reviews.as_str(), json!({"text": "Hi"}), "Missing user_id"),
        (place_reviews.as_str(), json!({"user_id": user_id}), "Missing text"),
    ];

    for (uri, body, message) in cases {
        let (status, json) = call(&app, "POST", uri, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "POST {uri}");
        assert_eq!(json, json!({"error": message}), "POST {uri}");
    }

    let (_, after) = call(&app, "GET", "/api/v1/stats", None).await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn should_reject_body_that_is_not_json() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/states")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"error": "Not a JSON"}));

    let (status, body) = call(&app, "POST", "/api/v1/amenities", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Not a JSON"}));
}

#[tokio::test]
async fn should_reject_wrongly_typed_field() {
    let app = app().await;
    let (status, body) = call(&app, "POST", "/api/v1/states", Some(json!({"name": 42}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid State"));
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_keep_identity_and_foreign_keys_on_update() {
    let app = app().await;
    let world = populate(&app).await;
    let other = populate(&app).await;

    let uri = format!("/api/v1/places/{}", id_of(&world.place));
    let (status, updated) = call(
        &app,
        "PUT",
        &uri,
        Some(json!({
            "id": "forged",
            "created_at": "2000-01-01T00:00:00Z",
            "updated_at": "2000-01-01T00:00:00Z",
            "user_id": id_of(&other.user),
            "city_id": id_of(&other.city),
            "name": "Penthouse",
            "max_guest": 6,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Penthouse");
    assert_eq!(updated["max_guest"], 6);
    assert_eq!(updated["price_by_night"], 120);
    assert_eq!(updated["id"], world.place["id"]);
    assert_eq!(updated["created_at"], world.place["created_at"]);
    assert_eq!(updated["user_id"], world.place["user_id"]);
    assert_eq!(updated["city_id"], world.place["city_id"]);
    assert_ne!(updated["updated_at"], "2000-01-01T00:00:00Z");

    let (_, fetched) = call(&app, "GET", &uri, None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn should_keep_email_on_user_update() {
    let app = app().await;
    let world = populate(&app).await;

    let uri = format!("/api/v1/users/{}", id_of(&world.user));
    let (status, updated) = call(
        &app,
        "PUT",
        &uri,
        Some(json!({"email": "eve@example.com", "last_name": "Lovelace"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["email"], "host@example.com");
    assert_eq!(updated["last_name"], "Lovelace");
    assert_eq!(updated["first_name"], "Ada");
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_resource() {
    let app = app().await;
    let (status, _) = call(
        &app,
        "PUT",
        "/api/v1/amenities/2f1bb1d4-6a7e-4f3c-9c53-6e7b1d0a9e11",
        Some(json!({"name": "Pool"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Parents and routing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_unknown_parent() {
    let app = app().await;
    let world = populate(&app).await;
    let unknown = "2f1bb1d4-6a7e-4f3c-9c53-6e7b1d0a9e11";

    let (status, _) = call(
        &app,
        "POST",
        &format!("/api/v1/cities/{unknown}/places"),
        Some(json!({"user_id": id_of(&world.user), "name": "Loft"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for uri in [
        format!("/api/v1/states/{unknown}/cities"),
        format!("/api/v1/cities/{unknown}/places"),
        format!("/api/v1/places/{unknown}/reviews"),
    ] {
        let (status, body) = call(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        assert_eq!(body, json!({"error": "Not found"}));
    }
}

#[tokio::test]
async fn should_return_not_found_for_unknown_user_reference() {
    let app = app().await;
    let world = populate(&app).await;

    let (status, _) = call(
        &app,
        "POST",
        &format!("/api/v1/places/{}/reviews", id_of(&world.place)),
        Some(json!({"user_id": "not-a-user", "text": "Hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_list_children_of_parent() {
    let app = app().await;
    let world = populate(&app).await;

    let (_, cities) = call(
        &app,
        "GET",
        &format!("/api/v1/states/{}/cities", id_of(&world.state)),
        None,
    )
    .await;
    assert_eq!(cities, json!([world.city]));

    let (_, places) = call(
        &app,
        "GET",
        &format!("/api/v1/cities/{}/places", id_of(&world.city)),
        None,
    )
    .await;
    assert_eq!(places, json!([world.place]));

    let (_, reviews) = call(
        &app,
        "GET",
        &format!("/api/v1/places/{}/reviews", id_of(&world.place)),
        None,
    )
    .await;
    assert_eq!(reviews, json!([world.review]));

    let (_, all_cities) = call(&app, "GET", "/api/v1/cities", None).await;
    assert_eq!(all_cities, json!([world.city]));
}

#[tokio::test]
async fn should_treat_trailing_slash_like_bare_path() {
    let app = app().await;

    let (status, created) = call(
        &app,
        "POST",
        "/api/v1/states/",
        Some(json!({"name": "California"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, listed) = call(&app, "GET", "/api/v1/states/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));

    let (_, bare) = call(&app, "GET", "/api/v1/states", None).await;
    assert_eq!(bare, listed);

    let (status, fetched) = call(
        &app,
        "GET",
        &format!("/api/v1/states/{}/", id_of(&created)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = call(&app, "GET", "/api/v1/status/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK"}));
}

#[tokio::test]
async fn should_answer_json_404_for_unknown_route() {
    let app = app().await;
    let (status, body) = call(&app, "GET", "/api/v1/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_cascade_state_deletion_down_to_reviews() {
    let app = app().await;
    let world = populate(&app).await;

    let (status, _) = call(
        &app,
        "DELETE",
        &format!("/api/v1/states/{}", id_of(&world.state)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = call(&app, "GET", "/api/v1/stats", None).await;
    assert_eq!(
        stats,
        json!({"amenities": 1, "cities": 0, "places": 0, "reviews": 0, "states": 0, "users": 1})
    );
}

#[tokio::test]
async fn should_cascade_user_deletion_to_places_and_reviews() {
    let app = app().await;
    let world = populate(&app).await;

    call(
        &app,
        "DELETE",
        &format!("/api/v1/users/{}", id_of(&world.user)),
        None,
    )
    .await;

    let (_, stats) = call(&app, "GET", "/api/v1/stats", None).await;
    assert_eq!(
        stats,
        json!({"amenities": 1, "cities": 1, "places": 0, "reviews": 0, "states": 1, "users": 0})
    );
}
