//! # credcheck ドメイン層
//!
//! 認証情報ストアが扱うユーザーレコードと、パスワード関連の値オブジェクトを
//! 定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! login-service → infra → domain
//!        client ────────↗
//! ```
//!
//! ドメイン層は I/O を一切持たない。HTTP・ストア・生体認証はそれぞれ
//! 上位のクレートが担当する。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`password`] - 平文パスワードと検証結果
//! - [`user`] - ユーザーレコードと識別子
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use credcheck_domain::user::{UserId, UserRecord, Username};
//!
//! let user = UserRecord::new(UserId::new(1), Username::new("mylena")?, "my123");
//! assert_eq!(user.username().as_str(), "mylena");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod password;
pub mod user;

pub use error::DomainError;
