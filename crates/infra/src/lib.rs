//! # credcheck インフラ層
//!
//! 認証情報ストアとパスワード比較の具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! ストアは起動時に作られる読み取り専用のインメモリ集合で、リポジトリトレイト
//! 経由で注入する。テストはプロセス状態に触れずに任意のフィクスチャを渡せる。
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`password`] - パスワード比較
//! - [`repository`] - ユーザーリポジトリ（認証情報ストア）
//!
//! ## 使用例
//!
//! ```rust
//! # async fn run() -> Result<(), credcheck_infra::InfraError> {
//! use credcheck_infra::repository::{InMemoryUserRepository, UserRepository};
//!
//! let repo = InMemoryUserRepository::seeded()?;
//! let user = repo.find_by_username("mylena").await?;
//! assert!(user.is_some());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod password;
pub mod repository;

pub use error::InfraError;
pub use password::{PasswordChecker, PlaintextPasswordChecker};
