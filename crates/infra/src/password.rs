//! # パスワード比較
//!
//! ストアに登録された平文パスワードと入力値を比較する。
//!
//! 比較は完全一致だが、`subtle` による定数時間比較で行う。一致判定の意味は
//! 単純な文字列比較と同じで、変わるのは処理時間の特性だけである。
//! ハッシュ比較を導入する場合は [`PasswordChecker`] の別実装として差し込む。

use credcheck_domain::password::{PasswordVerifyResult, PlainPassword};
use subtle::ConstantTimeEq;

use crate::InfraError;

/// パスワード比較を担当するトレイト
pub trait PasswordChecker: Send + Sync {
    /// 入力値と登録値を比較する
    ///
    /// # Errors
    ///
    /// 登録値が比較可能な形式でない場合（ハッシュ実装向け）
    fn verify(
        &self,
        input: &PlainPassword,
        stored: &PlainPassword,
    ) -> Result<PasswordVerifyResult, InfraError>;
}

/// 平文同士を定数時間で比較する実装
///
/// 長さが異なる場合は内容を見ずに不一致となる（長さは秘匿しない）。
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextPasswordChecker;

impl PlaintextPasswordChecker {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordChecker for PlaintextPasswordChecker {
    fn verify(
        &self,
        input: &PlainPassword,
        stored: &PlainPassword,
    ) -> Result<PasswordVerifyResult, InfraError> {
        let matched: bool = input.as_bytes().ct_eq(stored.as_bytes()).into();
        Ok(PasswordVerifyResult::from(matched))
    }
}
