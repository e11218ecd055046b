//! # ドメイン層エラー定義
//!
//! 値オブジェクトの生成時に発生するエラーを表現する。
//!
//! ログイン時の「ユーザーが見つからない」「パスワード不一致」はドメインの
//! ルール違反ではなくユースケースの結果なので、ここではなくログインサービス側の
//! `LoginError` で表現する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// シードデータなど、ストアに登録する値がルールに違反している場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
