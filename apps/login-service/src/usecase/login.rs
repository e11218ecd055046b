//! # ログインユースケース
//!
//! 1. ユーザー名が完全一致するレコードを探す（大文字小文字を区別、先勝ち）
//! 2. 見つからなければ `UserNotFound`
//! 3. 見つかればパスワードを比較し、一致ならレコードを、不一致なら `PasswordMismatch` を返す
//!
//! 状態を持たず、副作用もない。レート制限やロックアウトは行わない。

use std::sync::Arc;

use credcheck_domain::{password::PlainPassword, user::UserRecord};
use credcheck_infra::{PasswordChecker, repository::UserRepository};

use crate::error::LoginError;

/// ログインユースケースの実装
pub struct LoginUseCaseImpl {
    user_repository:  Arc<dyn UserRepository>,
    password_checker: Arc<dyn PasswordChecker>,
}

impl LoginUseCaseImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_checker: Arc<dyn PasswordChecker>,
    ) -> Self {
        Self {
            user_repository,
            password_checker,
        }
    }

    /// ユーザー名とパスワードを照合する
    ///
    /// ユーザー名の欠落は未登録と、パスワードの欠落は不一致と同じ扱いにする。
    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&PlainPassword>,
    ) -> Result<UserRecord, LoginError> {
        let Some(username) = username else {
            return Err(LoginError::UserNotFound);
        };

        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(LoginError::UserNotFound)?;

        let Some(password) = password else {
            return Err(LoginError::PasswordMismatch);
        };

        let result = self.password_checker.verify(password, user.password())?;
        if result.is_mismatch() {
            return Err(LoginError::PasswordMismatch);
        }

        Ok(user)
    }
}
