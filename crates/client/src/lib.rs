//! # credcheck クライアント
//!
//! モバイルアプリのログイン画面が使うクライアントライブラリ。
//!
//! ## モジュール構成
//!
//! - [`api`] - Login Service への HTTP 通信
//! - [`biometric`] - 端末の生体認証機能の抽象
//! - [`error`] - クライアントエラーと通知文言
//! - [`flow`] - パスワード・生体認証のログインフロー
//!
//! ## 使用例
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use credcheck_client::biometric::BiometricCapability;
//! # async fn run(biometric: Arc<dyn BiometricCapability>) {
//! use credcheck_client::{HttpLoginApi, LoginFlow, LoginOutcome};
//!
//! let flow = LoginFlow::new(Arc::new(HttpLoginApi::new("http://localhost:3000")), biometric);
//!
//! match flow.login_with_password("mylena", "my123").await {
//!     Ok(LoginOutcome::Authenticated { user }) => println!("ようこそ {}", user.username()),
//!     Ok(_) => {}
//!     Err(e) => eprintln!("{}", e.notification()),
//! }
//! # }
//! ```

pub mod api;
pub mod biometric;
pub mod error;
pub mod flow;

pub use api::{HttpLoginApi, LoginApi};
pub use error::ClientError;
pub use flow::{LoginFlow, LoginOutcome};
