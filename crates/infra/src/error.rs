//! # インフラ層エラー定義
//!
//! ストアの構築や参照で発生するエラーを表現する。
//!
//! `std::io::Error` と同じ struct + enum パターンを採用する:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `From` 実装と convenience constructor はエラー生成時点のスパンを捕捉する。

use std::fmt;

use credcheck_domain::DomainError;
use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// シードデータ不正
    ///
    /// 起動時にストアへ登録する値がドメインのルールに違反している。
    #[error("シードデータが不正です: {0}")]
    InvalidSeed(#[source] DomainError),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<DomainError> for InfraError {
    fn from(source: DomainError) -> Self {
        Self {
            kind:       InfraErrorKind::InvalidSeed(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_from_domain_errorでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("seed_store");
            let _enter = span.enter();

            let err: InfraError = DomainError::Validation("ユーザー名は必須です".to_string()).into();

            assert!(matches!(err.kind(), InfraErrorKind::InvalidSeed(_)));
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("seed_store"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_unexpectedのdisplay() {
        let err = InfraError::unexpected("ストアに接続できません");

        assert_eq!(
            err.to_string(),
            "予期しないエラー: ストアに接続できません"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_invalid_seedはsourceにドメインエラーを持つ() {
        let err: InfraError = DomainError::Validation("x".to_string()).into();

        assert!(err.source().is_some());
    }
}
