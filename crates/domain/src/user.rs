//! # ユーザー
//!
//! 認証情報ストアに登録されるユーザーレコードを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`UserId`] | ユーザー ID | 登録時に割り当てる整数 |
//! | [`Username`] | ユーザー名 | 大文字小文字を区別する完全一致で照合 |
//! | [`UserRecord`] | ユーザーレコード | プロセス起動時に作成され、以後変更されない |
//!
//! ## ワイヤ形式
//!
//! ```json
//! { "id": 1, "username": "mylena", "password": "my123" }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{DomainError, password::PlainPassword};

/// ユーザー ID
///
/// JSON では素の整数として表現される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// ユーザー名
///
/// 正規化（trim、小文字化）は行わない。照合は入力値との完全一致で、
/// `Mylena` と `mylena` は別のユーザー名として扱う。
///
/// デシリアライズ時も [`Username::new`] の検証を通る。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct Username(String);

impl Username {
    /// ユーザー名を作成する
    ///
    /// # エラー
    ///
    /// 空文字列の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation("ユーザー名は必須です".to_string()));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 入力値と完全一致するかを返す
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

/// ユーザーレコード
///
/// 認証情報ストアの 1 エントリ。生成後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    id:       UserId,
    username: Username,
    password: PlainPassword,
}

impl UserRecord {
    pub fn new(id: UserId, username: Username, password: impl Into<String>) -> Self {
        Self {
            id,
            username,
            password: PlainPassword::new(password),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &PlainPassword {
        &self.password
    }
}
