//! # Login Service サーバー
//!
//! モバイルアプリのログイン画面から呼ばれる、認証情報照合用の API サーバー。
//!
//! ## 役割
//!
//! - **認証情報ストア**: 起動時にシードデータからインメモリで構築（永続化なし）
//! - **ログイン照合**: `GET /login` でユーザー名とパスワードを照合
//!
//! トークン発行・セッション管理・パスワードのハッシュ化・レート制限は行わない。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `LOGIN_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `LOGIN_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（大文字小文字を区別しない、デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p credcheck-login-service
//!
//! curl 'http://localhost:3000/login?username=mylena&password=my123'
//! ```

use std::sync::Arc;

use credcheck_infra::repository::InMemoryUserRepository;
use credcheck_login_service::{
    app::{build_router, login_state},
    config::LoginConfig,
};
use credcheck_shared::observability::init_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing("login-service");
    let _tracing_guard = tracing::info_span!("app", service = "login-service").entered();

    let config = LoginConfig::from_env()?;

    let user_repository = InMemoryUserRepository::seeded()?;
    tracing::info!(
        users = user_repository.len(),
        "認証情報ストアを初期化しました"
    );

    let app = build_router(login_state(Arc::new(user_repository)));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        "Login Service サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
