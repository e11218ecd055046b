//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `login`: 認証情報の照合

pub mod health;
pub mod login;

pub use health::health_check;
pub use login::{LoginQuery, LoginResponse, LoginState, login};
