//! # ログインフロー
//!
//! ログイン画面の 2 つのボタン（パスワードログイン・生体認証ログイン）の
//! 処理を実装する。成功時の画面遷移はホストアプリが [`LoginOutcome`] を
//! 見て行う。

use std::sync::Arc;

use credcheck_domain::user::UserRecord;

use crate::{
    ClientError,
    api::LoginApi,
    biometric::{BiometricCapability, BiometricPrompt},
};

/// ログイン成功時の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// パスワードで認証された
    Authenticated { user: UserRecord },
    /// 端末の生体認証を通過した
    ///
    /// サーバー照合は行わないため、ユーザー情報を持たない。
    BiometricVerified,
}

/// ログイン画面のフロー
pub struct LoginFlow {
    api:       Arc<dyn LoginApi>,
    biometric: Arc<dyn BiometricCapability>,
}

impl LoginFlow {
    pub fn new(api: Arc<dyn LoginApi>, biometric: Arc<dyn BiometricCapability>) -> Self {
        Self { api, biometric }
    }

    /// ユーザー名とパスワードでログインする
    ///
    /// # Errors
    ///
    /// - 404: [`ClientError::UserNotFound`]
    /// - 401: [`ClientError::PasswordMismatch`]
    /// - その他の `success: false`: [`ClientError::Rejected`]
    /// - 通信失敗: [`ClientError::NetworkFailure`]
    pub async fn login_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ClientError> {
        let reply = self.api.login(username, password).await.inspect_err(|e| {
            tracing::warn!(error = %e, "ログイン API の呼び出しに失敗しました");
        })?;

        if reply.body.success {
            return match reply.body.user {
                Some(user) => Ok(LoginOutcome::Authenticated { user }),
                None => Err(ClientError::NetworkFailure(
                    "成功レスポンスにユーザーが含まれていません".to_string(),
                )),
            };
        }

        let message = reply.body.message;
        match reply.status {
            404 => Err(ClientError::UserNotFound(message)),
            401 => Err(ClientError::PasswordMismatch(message)),
            _ => Err(ClientError::Rejected(message)),
        }
    }

    /// 端末の生体認証でログインする
    ///
    /// # Errors
    ///
    /// - ハードウェアなし: [`ClientError::BiometricUnavailable`]
    /// - 対応方式なし: [`ClientError::BiometricUnsupported`]
    /// - 認証失敗: [`ClientError::BiometricAuthFailed`]
    pub async fn login_with_biometrics(&self) -> Result<LoginOutcome, ClientError> {
        if !self.biometric.has_hardware().await {
            return Err(ClientError::BiometricUnavailable);
        }

        if self.biometric.supported_types().await.is_empty() {
            return Err(ClientError::BiometricUnsupported);
        }

        let result = self.biometric.authenticate(&BiometricPrompt::login()).await;
        if !result.success {
            return Err(ClientError::BiometricAuthFailed);
        }

        Ok(LoginOutcome::BiometricVerified)
    }
}
