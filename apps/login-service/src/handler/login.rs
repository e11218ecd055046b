//! # ログインハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /login?username=<string>&password=<string>`
//!
//! ## レスポンス
//!
//! | ステータス | ボディ |
//! |-----------|--------|
//! | 200 | `{ "success": true, "message": "Logado", "user": { "id", "username", "password" } }` |
//! | 404 | `{ "success": false, "message": "Usuário não encontrado" }` |
//! | 401 | `{ "success": false, "message": "Senha Errada" }` |
//!
//! ## 既知の問題
//!
//! 成功レスポンスの `user.password` は登録済みの平文パスワードをそのまま返す。
//! 既存クライアントとのワイヤ互換のために残しており、機密性の欠陥である。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use credcheck_domain::{password::PlainPassword, user::UserRecord};
use serde::Serialize;

use crate::{error::LoginError, usecase::LoginUseCase};

/// ログイン成功時のメッセージ
pub const MESSAGE_LOGGED_IN: &str = "Logado";

/// ログインハンドラの共有状態
pub struct LoginState {
    pub usecase: Arc<dyn LoginUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// ログインのクエリパラメータ
///
/// Debug 出力ではパスワードがマスクされる。
#[derive(Debug)]
pub struct LoginQuery {
    pub username: Option<String>,
    pub password: Option<PlainPassword>,
}

impl LoginQuery {
    /// デコード済みのキーと値の組から組み立てる
    ///
    /// 同じキーが複数回現れた値はどの登録値とも一致しないため、欠落と同じ
    /// `None` にする。ユーザー名なら未登録、パスワードなら不一致の扱いになる。
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            username: single_value(pairs, "username"),
            password: single_value(pairs, "password").map(PlainPassword::new),
        }
    }
}

/// キーがちょうど 1 回現れた場合だけ値を返す
fn single_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v);

    match (values.next(), values.next()) {
        (Some(value), None) => Some(value.clone()),
        _ => None,
    }
}

/// ログインレスポンス
///
/// 失敗時は `user` フィールド自体を出力しない。
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user:    Option<UserRecord>,
}

impl LoginResponse {
    pub fn success(user: UserRecord) -> Self {
        Self {
            success: true,
            message: MESSAGE_LOGGED_IN.to_string(),
            user:    Some(user),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user:    None,
        }
    }
}

// --- ハンドラ ---

/// GET /login
///
/// 受信したクエリを診断ログに 1 行出力してから照合する。
/// クエリは組のまま受け取るため、キーの重複で抽出が失敗することはない。
pub async fn login(
    State(state): State<Arc<LoginState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, LoginError> {
    let query = LoginQuery::from_pairs(&pairs);
    tracing::info!(?query, "ログインリクエストを受信しました");

    let user = state
        .usecase
        .login(query.username.as_deref(), query.password.as_ref())
        .await?;

    Ok(Json(LoginResponse::success(user)))
}
