//! # アプリケーション構築
//!
//! DI（ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//!
//! ## レイヤー構成
//!
//! ```text
//! SetRequestId → TraceLayer → PropagateRequestId → CORS → handler
//! ```

use std::sync::Arc;

use axum::{Router, routing::get};
use credcheck_infra::{PlaintextPasswordChecker, repository::UserRepository};
use credcheck_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{LoginState, health_check, login},
    usecase::LoginUseCaseImpl,
};

/// リポジトリからログインハンドラの State を組み立てる
pub fn login_state(user_repository: Arc<dyn UserRepository>) -> Arc<LoginState> {
    let usecase = LoginUseCaseImpl::new(user_repository, Arc::new(PlaintextPasswordChecker::new()));

    Arc::new(LoginState {
        usecase: Arc::new(usecase),
    })
}

/// ルーターを構築する
///
/// CORS は任意のオリジン・メソッド・ヘッダーを許可する。
pub fn build_router(state: Arc<LoginState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/login", get(login))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
