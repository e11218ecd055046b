//! # 生体認証
//!
//! 端末の生体認証機能（指紋・顔認証など）を抽象化する。
//! 実装はホストアプリが端末 API を使って提供する。

use async_trait::async_trait;

/// 生体認証プロンプトに表示するメッセージ
pub const PROMPT_MESSAGE: &str = "Login com biometria";

/// 生体認証プロンプトの代替手段ラベル
pub const FALLBACK_LABEL: &str = "Usar senha";

/// 端末が対応する生体認証方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiometricType {
    Fingerprint,
    FacialRecognition,
    Iris,
}

/// 生体認証プロンプトの表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiometricPrompt {
    pub message:        String,
    pub fallback_label: String,
}

impl BiometricPrompt {
    /// ログイン画面で使うプロンプト
    pub fn login() -> Self {
        Self {
            message:        PROMPT_MESSAGE.to_string(),
            fallback_label: FALLBACK_LABEL.to_string(),
        }
    }
}

/// 生体認証の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiometricResult {
    pub success: bool,
}

/// 端末の生体認証機能
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait BiometricCapability: Send + Sync {
    /// 生体認証ハードウェアがあるか
    async fn has_hardware(&self) -> bool;

    /// 対応する生体認証方式
    async fn supported_types(&self) -> Vec<BiometricType>;

    /// 利用者に生体認証を求める
    async fn authenticate(&self, prompt: &BiometricPrompt) -> BiometricResult;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ログイン用プロンプトの文言() {
        let prompt = BiometricPrompt::login();

        assert_eq!(prompt.message, "Login com biometria");
        assert_eq!(prompt.fallback_label, "Usar senha");
    }
}
