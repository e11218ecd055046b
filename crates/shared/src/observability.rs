//! # Observability 基盤
//!
//! トレーシング初期化、ログ出力形式、HTTP リクエストのスパンと Request ID を提供する。
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,credcheck_login_service=debug,credcheck_infra=debug";

/// ログ出力形式を指定する環境変数
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 イベント 1 行の JSON
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する（大文字小文字は区別しない）
    ///
    /// 未知の値は `None`。
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` でログレベルを、`LOG_FORMAT` で出力形式を制御する。
/// `RUST_LOG` 未設定時は [`DEFAULT_LOG_FILTER`]、`LOG_FORMAT` が未設定または
/// 未知の値なら pretty になる。未知の値は初期化後に warn で報告する。
/// `ErrorLayer` を登録し、エラー生成時の `SpanTrace` 捕捉を有効にする。
#[cfg(feature = "observability")]
pub fn init_tracing(service_name: &str) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let requested = std::env::var(LOG_FORMAT_ENV).ok();
    let parsed = requested.as_deref().map(LogFormat::from_value);
    let log_format = parsed.flatten().unwrap_or_default();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let fmt_layer = match log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    if let (Some(value), Some(None)) = (requested.as_deref(), parsed) {
        tracing::warn!(log_format = value, "未知の LOG_FORMAT のため pretty で出力します");
    }
    tracing::debug!(service = service_name, ?log_format, "トレーシングを初期化しました");
}

/// HTTP リクエストごとのスパンを作成する
///
/// `TraceLayer::make_span_with` に渡す。`SetRequestIdLayer` より内側で呼ばれるため、
/// `x-request-id` ヘッダーは常に存在する。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

/// UUID v7 で Request ID を生成する
///
/// クライアントが `x-request-id` を送ってきた場合は `SetRequestIdLayer` が
/// そちらを優先するため、この生成器は呼ばれない。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        http::HeaderValue::from_str(&id)
            .ok()
            .map(tower_http::request_id::RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("json", Some(LogFormat::Json))]
    #[case("JSON", Some(LogFormat::Json))]
    #[case(" pretty ", Some(LogFormat::Pretty))]
    #[case("", None)]
    #[case("yaml", None)]
    fn test_log_formatの解釈(#[case] value: &str, #[case] expected: Option<LogFormat>) {
        assert_eq!(LogFormat::from_value(value), expected);
    }

    #[test]
    fn test_既定の出力形式はpretty() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }
}
