//! ログイン API の統合テスト
//!
//! シード済みの認証情報ストアで組み立てたルーター全体（レイヤー込み）に
//! リクエストを送り、ステータスとボディを検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p credcheck-login-service --test login_integration_test
//! ```

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use credcheck_infra::repository::InMemoryUserRepository;
use credcheck_login_service::app::{build_router, login_state};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tower::ServiceExt;

fn seeded_app() -> Router {
    let repo = InMemoryUserRepository::seeded().unwrap();
    build_router(login_state(Arc::new(repo)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

// --- ログイン照合 ---

#[tokio::test]
async fn test_正しい認証情報でログインできる() {
    // Given
    let sut = seeded_app();

    // When
    let (status, json) = get_json(sut, "/login?username=mylena&password=my123").await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "success": true,
            "message": "Logado",
            "user": { "id": 1, "username": "mylena", "password": "my123" }
        })
    );
}

#[tokio::test]
async fn test_パスワード違いは401() {
    let sut = seeded_app();

    let (status, json) = get_json(sut, "/login?username=mylena&password=wrong").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        json,
        serde_json::json!({ "success": false, "message": "Senha Errada" })
    );
}

#[rstest]
#[case::未登録ユーザー("/login?username=nobody&password=x")]
#[case::大文字小文字は区別する("/login?username=Mylena&password=my123")]
#[case::前後の空白は除去しない("/login?username=%20mylena&password=my123")]
#[case::ユーザー名欠落("/login?password=my123")]
#[case::パラメータなし("/login")]
#[case::ユーザー名が空文字列("/login?username=&password=my123")]
#[case::ユーザー名の重複("/login?username=nobody&username=mylena&password=my123")]
#[case::登録済みユーザー名の重複("/login?username=mylena&username=mylena&password=my123")]
#[tokio::test]
async fn test_ユーザーが見つからない場合は404(#[case] uri: &str) {
    let sut = seeded_app();

    let (status, json) = get_json(sut, uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        serde_json::json!({ "success": false, "message": "Usuário não encontrado" })
    );
}

#[rstest]
#[case::パスワード欠落("/login?username=mylena")]
#[case::パスワードが空文字列("/login?username=mylena&password=")]
#[case::パスワードの大文字小文字("/login?username=mylena&password=MY123")]
#[case::パスワードの重複("/login?username=mylena&password=x&password=my123")]
#[tokio::test]
async fn test_登録済みユーザーでパスワードが一致しない場合は401(#[case] uri: &str) {
    let sut = seeded_app();

    let (status, json) = get_json(sut, uri).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Senha Errada");
}

#[tokio::test]
async fn test_同じリクエストは何度でも同じ結果になる() {
    let sut = seeded_app();

    let first = get_json(sut.clone(), "/login?username=mylena&password=my123").await;
    let second = get_json(sut, "/login?username=mylena&password=my123").await;

    assert_eq!(first, second);
}

// --- 横断的関心事 ---

#[tokio::test]
async fn test_任意のオリジンからのリクエストを許可する() {
    // Given
    let sut = seeded_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/login?username=mylena&password=my123")
        .header(header::ORIGIN, "http://localhost:19006")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn test_プリフライトリクエストに応答する() {
    let sut = seeded_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/login")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let response = sut.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    );
}

#[tokio::test]
async fn test_レスポンスにリクエストidが付与される() {
    let sut = seeded_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/login?username=nobody")
        .body(Body::empty())
        .unwrap();

    let response = sut.oneshot(request).await.unwrap();

    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_クライアント指定のリクエストidを引き継ぐ() {
    let sut = seeded_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/login?username=nobody")
        .header("x-request-id", "client-supplied-id")
        .body(Body::empty())
        .unwrap();

    let response = sut.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "client-supplied-id"
    );
}

#[tokio::test]
async fn test_ヘルスチェックは200() {
    let sut = seeded_app();

    let (status, json) = get_json(sut, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_未定義のパスは404() {
    let sut = seeded_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/unknown")
        .body(Body::empty())
        .unwrap();

    let response = sut.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
