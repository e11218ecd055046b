//! # Login Service エラー定義
//!
//! ログインの失敗と、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス | message |
//! |--------|----------------|---------|
//! | `UserNotFound` | 404 | `Usuário não encontrado` |
//! | `PasswordMismatch` | 401 | `Senha Errada` |
//! | `Repository` | 500 | `Erro interno` |
//!
//! メッセージは既存のモバイルクライアントがそのまま表示するため、文言を変えない。
//! 404 はどちらの入力が誤っていたかを示さない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use credcheck_infra::InfraError;
use thiserror::Error;

use crate::handler::login::LoginResponse;

/// ユーザーが見つからない場合のメッセージ
pub const MESSAGE_USER_NOT_FOUND: &str = "Usuário não encontrado";
/// パスワード不一致の場合のメッセージ
pub const MESSAGE_PASSWORD_MISMATCH: &str = "Senha Errada";
/// 内部エラーの場合のメッセージ
pub const MESSAGE_INTERNAL_ERROR: &str = "Erro interno";

/// ログイン処理で発生するエラー
#[derive(Debug, Error)]
pub enum LoginError {
    /// ユーザー名に一致するレコードがない（パラメータ欠落を含む）
    #[error("ユーザーが見つかりません")]
    UserNotFound,

    /// パスワードが一致しない（パラメータ欠落を含む）
    #[error("パスワードが一致しません")]
    PasswordMismatch,

    /// 認証情報ストアの参照失敗
    #[error("リポジトリエラー: {0}")]
    Repository(#[from] InfraError),
}

impl LoginError {
    /// HTTP ステータスコード
    pub fn status(&self) -> StatusCode {
        match self {
            LoginError::UserNotFound => StatusCode::NOT_FOUND,
            LoginError::PasswordMismatch => StatusCode::UNAUTHORIZED,
            LoginError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// クライアントに返すメッセージ
    pub fn message(&self) -> &'static str {
        match self {
            LoginError::UserNotFound => MESSAGE_USER_NOT_FOUND,
            LoginError::PasswordMismatch => MESSAGE_PASSWORD_MISMATCH,
            LoginError::Repository(_) => MESSAGE_INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        if let LoginError::Repository(e) = &self {
            tracing::error!(error = ?e, "認証情報ストアの参照に失敗しました");
        }

        (self.status(), Json(LoginResponse::failure(self.message()))).into_response()
    }
}
