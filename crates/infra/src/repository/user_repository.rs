//! # UserRepository
//!
//! 認証情報ストア（ユーザー名とパスワードの固定集合）への参照を担当する。
//!
//! ## 設計方針
//!
//! - **起動時に確定**: レコードはプロセス起動時に一度だけ作られ、以後変更も削除もされない
//! - **永続化なし**: 再起動でシードデータに戻る
//! - **ロックなし**: 読み取り専用なので共有にロックを必要としない
//! - **先勝ち**: ユーザー名の一意性は前提であり検証しない。重複時は先に登録したレコードを返す

use async_trait::async_trait;
use credcheck_domain::user::{UserId, UserRecord, Username};

use crate::error::InfraError;

/// シードデータ（id, ユーザー名, パスワード）
const SEED_USERS: &[(i64, &str, &str)] = &[(1, "mylena", "my123")];

/// シードデータからユーザーレコードを作成する
///
/// # Errors
///
/// シードのユーザー名がドメインのルールに違反している場合
pub fn seed_users() -> Result<Vec<UserRecord>, InfraError> {
    SEED_USERS
        .iter()
        .map(|&(id, username, password)| -> Result<UserRecord, InfraError> {
            Ok(UserRecord::new(
                UserId::new(id),
                Username::new(username)?,
                password,
            ))
        })
        .collect()
}

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ユーザー名でレコードを検索する
    ///
    /// 大文字小文字を区別する完全一致。正規化は行わない。
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user))`: 一致するレコードが見つかった場合（複数あれば最初のもの）
    /// - `Ok(None)`: 見つからない場合
    /// - `Err(_)`: ストアの参照に失敗した場合
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, InfraError>;
}

/// インメモリのユーザーリポジトリ
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Vec<UserRecord>,
}

impl InMemoryUserRepository {
    /// 任意のレコード集合からストアを作成する
    ///
    /// 登録順が検索順になる。
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// シードデータでストアを作成する
    pub fn seeded() -> Result<Self, InfraError> {
        Ok(Self::new(seed_users()?))
    }

    /// 登録件数を返す
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, InfraError> {
        Ok(self
            .users
            .iter()
            .find(|user| user.username().matches(username))
            .cloned())
    }
}
