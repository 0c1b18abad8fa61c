use super::*;
use axum::body::to_bytes;

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.expect("body should read");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn failure_serializes_envelope_with_code() {
    let failure = ApiFailure::new(StatusCode::NOT_FOUND, error_code::NOT_FOUND, "product not found");
    let response = failure.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "product not found");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn unauthenticated_is_401_with_stable_code() {
    let response = ApiFailure::unauthenticated().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn storage_failure_hides_database_detail() {
    let err = sqlx::Error::PoolTimedOut;
    let response = ApiFailure::storage(&err).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "STORAGE_ERROR");
    assert_eq!(json["error"]["message"], "storage failure");
}
