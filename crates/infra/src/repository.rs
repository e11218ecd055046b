//! # リポジトリ実装
//!
//! - **依存性注入**: ユースケースは `Arc<dyn UserRepository>` を受け取る
//! - **読み取り専用**: 起動後にストアを書き換える操作は提供しない

pub mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserRepository, seed_users};
