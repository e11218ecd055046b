//! # Login Service 設定
//!
//! 環境変数からログインサーバーの設定を読み込む。

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LOGIN_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// Login Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl LoginConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// `from_env` は `std::env::var` を、テストはマップを参照元として渡す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("LOGIN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("LOGIN_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}
