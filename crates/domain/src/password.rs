//! # パスワード
//!
//! パスワード関連の値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`PlainPassword`] | 平文パスワード | ストアの登録値、ログイン時の入力値 |
//! | [`PasswordVerifyResult`] | 検証結果 | パスワード検証の成否 |
//!
//! ストアはパスワードを平文で保持する（ハッシュ化は行わない）。
//! 比較の方法は infra 層の `PasswordChecker` が決める。

use serde::{Deserialize, Serialize};

/// 平文パスワード
///
/// # セキュリティ
///
/// Debug 出力ではパスワードの値をマスクする。ログイン時の診断ログに
/// 入力値を出す場合もこの型を経由させる。
///
/// シリアライズは素の文字列になる。ログイン成功レスポンスの `user.password`
/// はこの経路で平文のまま返る。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlainPassword(String);

impl std::fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
    }
}

impl PlainPassword {
    /// パスワードを作成する
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// バイト列参照を取得する
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// パスワード検証結果
///
/// bool ではなく専用の型を使い、呼び出し側の分岐を読みやすくする。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordVerifyResult {
    /// パスワードが一致した
    Match,
    /// パスワードが一致しなかった
    Mismatch,
}

impl PasswordVerifyResult {
    /// 一致しなかったかどうかを返す
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch)
    }
}

impl From<bool> for PasswordVerifyResult {
    fn from(matched: bool) -> Self {
        if matched { Self::Match } else { Self::Mismatch }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_平文パスワードのdebug出力はマスクされる() {
        let password = PlainPassword::new("my123");
        let debug = format!("{:?}", password);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("my123"));
    }

    #[rstest]
    fn test_平文パスワードは素の文字列としてシリアライズされる() {
        let password = PlainPassword::new("my123");
        let json = serde_json::to_value(&password).unwrap();

        assert_eq!(json, serde_json::json!("my123"));
    }

    #[rstest]
    #[case(true, PasswordVerifyResult::Match)]
    #[case(false, PasswordVerifyResult::Mismatch)]
    fn test_boolからの変換(#[case] matched: bool, #[case] expected: PasswordVerifyResult) {
        let result = PasswordVerifyResult::from(matched);

        assert_eq!(result, expected);
        assert_eq!(result.is_mismatch(), !matched);
    }
}
