use crate::adapters::http::AppState;
use crate::core::validation::validate_create_payload;
use crate::core::Superhero;
use crate::utils::error::HeroError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

pub async fn root() -> &'static str {
    "Super Heroes!"
}

pub async fn list_superheroes(State(state): State<AppState>) -> Json<Vec<Superhero>> {
    let heroes = state.repository.list_sorted_by_humility().await;
    tracing::debug!("Listing {} superheroes", heroes.len());
    Json(heroes)
}

pub async fn create_superhero(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Superhero>), HeroError> {
    let Json(payload) = payload.map_err(|rejection| HeroError::MalformedBody {
        message: rejection.body_text(),
    })?;

    let created = validate_create_payload(&payload)?;
    let hero = state.repository.append(created.into()).await;

    tracing::info!(
        "➕ Added superhero '{}' (humility {})",
        hero.name,
        hero.humility_score
    );
    Ok((StatusCode::CREATED, Json(hero)))
}

#[cfg(test)]
mod tests {
    use crate::adapters::http::error::ErrorBody;
    use crate::adapters::http::{
        build_router, AppState, CorsPolicy, ALLOWED_METHODS, MAX_BODY_BYTES,
    };
    use crate::core::store::InMemorySuperheroStore;
    use crate::core::{Superhero, SuperheroRepository};
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    const ALLOWED_ORIGIN: &str = "http://localhost:5173";

    fn test_app(seed: Vec<Superhero>) -> (Router, Arc<InMemorySuperheroStore>) {
        let store = Arc::new(InMemorySuperheroStore::with_records(seed));
        let router = build_router(
            AppState::new(store.clone()),
            CorsPolicy::new(vec![
                ALLOWED_ORIGIN.to_string(),
                "http://127.0.0.1:5173".to_string(),
            ]),
        );
        (router, store)
    }

    fn post_json(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/superheroes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let (app, _) = test_app(vec![]);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Super Heroes!");
    }

    #[tokio::test]
    async fn test_list_sorted_by_humility() {
        let (app, _) = test_app(vec![
            Superhero::new("Iron Man", "Technology", 7),
            Superhero::new("Spider-Man", "Agility", 9),
        ]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/superheroes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([
                {"name": "Spider-Man", "superpower": "Agility", "humilityScore": 9},
                {"name": "Iron Man", "superpower": "Technology", "humilityScore": 7}
            ])
        );
    }

    #[tokio::test]
    async fn test_create_valid_superhero() {
        let (app, store) = test_app(vec![]);
        let loki = json!({"name": "Loki", "superpower": "Illusions", "humilityScore": 5});

        let response = app.oneshot(post_json(loki.clone())).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, loki);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_rejects_high_score() {
        let (app, store) = test_app(vec![]);

        let response = app
            .oneshot(post_json(json!({
                "name": "Thanos",
                "superpower": "Infinity Gauntlet",
                "humilityScore": 15
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = serde_json::from_value(body_json(response).await).unwrap();
        assert!(body
            .message
            .contains(&"humilityScore must not be greater than 10".to_string()));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let (app, _) = test_app(vec![]);

        let response = app
            .oneshot(post_json(json!({"superpower": "Magic"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = serde_json::from_value(body_json(response).await).unwrap();
        for expected in [
            "name must not be empty",
            "humilityScore must not be less than 1",
            "humilityScore must not be greater than 10",
        ] {
            assert!(
                body.message.contains(&expected.to_string()),
                "missing '{}' in {:?}",
                expected,
                body.message
            );
        }
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let (app, store) = test_app(vec![]);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/superheroes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.message.len(), 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_oversized_body_is_bad_request() {
        let (app, store) = test_app(vec![]);
        let padded = json!({
            "name": "Loki",
            "superpower": "x".repeat(MAX_BODY_BYTES),
            "humilityScore": 5
        });

        let response = app.oneshot(post_json(padded)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.message.len(), 1);
        assert!(body.message[0].contains("length limit exceeded"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_without_content_type_is_bad_request() {
        let (app, _) = test_app(vec![]);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/superheroes")
            .body(Body::from(
                json!({"name": "Loki", "superpower": "Illusions", "humilityScore": 5}).to_string(),
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_created_hero_appears_in_list() {
        let (app, _) = test_app(vec![Superhero::new("Thor", "Thunder", 8)]);

        let response = app
            .clone()
            .oneshot(post_json(
                json!({"name": "Groot", "superpower": "Regrowth", "humilityScore": 10}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/superheroes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let heroes: Vec<Superhero> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(heroes[0], Superhero::new("Groot", "Regrowth", 10));
        assert_eq!(heroes[1], Superhero::new("Thor", "Thunder", 8));
    }

    #[tokio::test]
    async fn test_allowed_origin_gets_cors_headers() {
        let (app, _) = test_app(vec![]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/superheroes")
                    .header(header::ORIGIN, ALLOWED_ORIGIN)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            ALLOWED_ORIGIN
        );
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_disallowed_origin_rejected_before_handler() {
        let (app, store) = test_app(vec![]);

        let mut request = post_json(json!({"name": "Loki", "superpower": "Illusions", "humilityScore": 5}));
        request
            .headers_mut()
            .insert(header::ORIGIN, "http://evil.example".parse().unwrap());
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_preflight_from_allowed_origin() {
        let (app, _) = test_app(vec![]);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/superheroes")
                    .header(header::ORIGIN, "http://127.0.0.1:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            ALLOWED_METHODS
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "content-type"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://127.0.0.1:5173"
        );
    }
}
