//! # クライアントエラー
//!
//! ログイン画面で発生しうる失敗を表す。いずれも今回の試行で終端し、
//! 自動リトライはしない。利用者には [`ClientError::notification`] の文言を
//! 閉じられる通知として表示する。

use thiserror::Error;

/// API に接続できなかった場合の通知文言
pub const NOTIFICATION_NETWORK_FAILURE: &str = "Falha ao conectar à API";

/// 生体認証ハードウェアがない場合の通知文言
pub const NOTIFICATION_BIOMETRIC_UNAVAILABLE: &str = "O dispositivo não possui hardware biométrico";

/// 対応する生体認証方式がない場合の通知文言
pub const NOTIFICATION_BIOMETRIC_UNSUPPORTED: &str =
    "Nenhum tipo de autenticação biométrica suportado";

/// 生体認証に失敗した場合の通知文言
pub const NOTIFICATION_BIOMETRIC_AUTH_FAILED: &str = "Falha na autenticação biométrica";

/// ログインクライアントのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// ユーザーが存在しない（404）
    #[error("ユーザーが見つかりません: {0}")]
    UserNotFound(String),

    /// パスワード不一致（401）
    #[error("パスワードが一致しません: {0}")]
    PasswordMismatch(String),

    /// その他のステータスでサーバーが拒否した
    #[error("ログインが拒否されました: {0}")]
    Rejected(String),

    /// 通信失敗またはレスポンスを解釈できない
    #[error("ネットワークエラー: {0}")]
    NetworkFailure(String),

    /// 生体認証ハードウェアがない
    #[error("生体認証ハードウェアがありません")]
    BiometricUnavailable,

    /// 対応する生体認証方式がない
    #[error("対応する生体認証方式がありません")]
    BiometricUnsupported,

    /// 生体認証に失敗した
    #[error("生体認証に失敗しました")]
    BiometricAuthFailed,
}

impl ClientError {
    /// 利用者に表示する通知文言
    ///
    /// サーバーが拒否した場合はサーバーのメッセージをそのまま返す。
    pub fn notification(&self) -> &str {
        match self {
            ClientError::UserNotFound(message)
            | ClientError::PasswordMismatch(message)
            | ClientError::Rejected(message) => message,
            ClientError::NetworkFailure(_) => NOTIFICATION_NETWORK_FAILURE,
            ClientError::BiometricUnavailable => NOTIFICATION_BIOMETRIC_UNAVAILABLE,
            ClientError::BiometricUnsupported => NOTIFICATION_BIOMETRIC_UNSUPPORTED,
            ClientError::BiometricAuthFailed => NOTIFICATION_BIOMETRIC_AUTH_FAILED,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::NetworkFailure(err.to_string())
    }
}
