//! News endpoints

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::http::error::ApiError;
use crate::models::NewsItem;
use crate::state::AppState;

/// GET /news - published items, newest first
async fn list_news(State(state): State<AppState>) -> Result<Json<Vec<NewsItem>>, ApiError> {
    let items = state.news.list_published().await?;
    tracing::debug!(count = items.len(), "Returning news items");
    Ok(Json(items))
}

/// GET /news/{id}
async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NewsItem>, ApiError> {
    let item = state.news.get_by_id(&id).await?;
    Ok(Json(item))
}

/// News routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/news", get(list_news))
        .route("/news/{id}", get(get_news))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::http::build_router;
    use crate::state::AppState;
    use crate::test_support::{failing_state, memory_state, sample_news};

    async fn get(state: AppState, uri: &str) -> Response {
        build_router(state, &ServerConfig::default())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn empty_list_is_json_array() {
        let response = get(memory_state(vec![], vec![]), "/api/v1/news").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"[]");
    }

    #[tokio::test]
    async fn lists_only_published_newest_first() {
        let state = memory_state(
            vec![
                sample_news("older", "published", 10),
                sample_news("draft", "draft", 0),
                sample_news("newer", "published", 1),
                sample_news("gone", "archived", 2),
            ],
            vec![],
        );

        let body = body_json(get(state, "/api/v1/news").await).await;
        let titles: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["title"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn null_content_serializes_as_null() {
        let mut item = sample_news("no body", "published", 0);
        item.content = None;
        let id = item.id;

        let body = body_json(get(memory_state(vec![item], vec![]), &format!("/api/v1/news/{id}")).await).await;
        assert_eq!(body["content"], json!(null));
    }

    #[tokio::test]
    async fn get_returns_any_status() {
        let item = sample_news("still a draft", "draft", 0);
        let id = item.id;

        let response = get(memory_state(vec![item], vec![]), &format!("/api/v1/news/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "draft");
    }

    #[tokio::test]
    async fn unknown_id_is_404() {
        let state = memory_state(vec![sample_news("a", "published", 0)], vec![]);

        let response = get(state.clone(), "/api/v1/news/7d1f7c1e-1b1a-4c55-9d1e-000000000000").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = get(state, "/api/v1/news/not-a-uuid").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn store_failure_is_500() {
        let response = get(failing_state(), "/api/v1/news").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = get(failing_state(), "/api/v1/news/7d1f7c1e-1b1a-4c55-9d1e-000000000000").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "internal_error");
    }
}
