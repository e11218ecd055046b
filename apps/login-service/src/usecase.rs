//! # ユースケース層
//!
//! ログインの判定ロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラはトレイト経由で呼び出し、テストではスタブに差し替える
//! - **依存性注入**: リポジトリとパスワードチェッカーを外部から注入
//! - **薄いハンドラ**: ハンドラは入出力の変換だけを行う

pub mod login;

use async_trait::async_trait;
use credcheck_domain::{password::PlainPassword, user::UserRecord};
pub use login::LoginUseCaseImpl;

use crate::error::LoginError;

/// ログインユースケーストレイト
#[async_trait]
pub trait LoginUseCase: Send + Sync {
    /// ユーザー名とパスワードを照合する
    ///
    /// ## 引数
    ///
    /// - `username`: クエリパラメータのユーザー名（欠落時は `None`）
    /// - `password`: クエリパラメータのパスワード（欠落時は `None`）
    ///
    /// ## 戻り値
    ///
    /// - `Ok(UserRecord)`: 一致したレコード
    /// - `Err(LoginError::UserNotFound)`: ユーザー名に一致するレコードがない
    /// - `Err(LoginError::PasswordMismatch)`: パスワードが一致しない
    async fn login(
        &self,
        username: Option<&str>,
        password: Option<&PlainPassword>,
    ) -> Result<UserRecord, LoginError>;
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn login(
        &self,
        username: Option<&str>,
        password: Option<&PlainPassword>,
    ) -> Result<UserRecord, LoginError> {
        self.login(username, password).await
    }
}
