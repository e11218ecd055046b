//! # ログイン API クライアント
//!
//! クライアントから Login Service への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `GET /login?username=..&password=..` - 認証情報の照合
//!
//! ステータスの解釈は [`crate::flow`] が行う。このモジュールは通信と
//! ボディのデコードだけを担う。

use async_trait::async_trait;
use credcheck_domain::user::UserRecord;
use serde::Deserialize;

use crate::ClientError;

// --- レスポンス型 ---

/// ログインレスポンスのボディ
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponseBody {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub user:    Option<UserRecord>,
}

/// ステータスコード付きのログインレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginReply {
    pub status: u16,
    pub body:   LoginResponseBody,
}

/// ログイン API クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait LoginApi: Send + Sync {
    /// 認証情報を照合する
    ///
    /// 非 2xx でもボディが解釈できれば `Ok` を返す。
    ///
    /// # Errors
    ///
    /// 通信に失敗した場合、またはボディを解釈できない場合は
    /// [`ClientError::NetworkFailure`]
    async fn login(&self, username: &str, password: &str) -> Result<LoginReply, ClientError>;
}

/// reqwest によるログイン API クライアント実装
pub struct HttpLoginApi {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpLoginApi {
    /// 新しい HttpLoginApi を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: Login Service のベース URL（例: `http://localhost:3000`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LoginApi for HttpLoginApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginReply, ClientError> {
        let url = format!("{}/login", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("username", username), ("password", password)])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.json::<LoginResponseBody>().await?;

        Ok(LoginReply { status, body })
    }
}
