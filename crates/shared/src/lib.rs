//! # credcheck 共有ユーティリティ
//!
//! ログインサービスとクライアントで共通に使うユーティリティを提供する。
//! ビジネスロジックは含めない。
//!
//! トレーシング関連は `observability` feature を有効にした場合のみ
//! 外部クレートに依存する。

pub mod health;
pub mod observability;

pub use health::HealthResponse;
