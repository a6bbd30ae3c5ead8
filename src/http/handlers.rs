//! Axum handlers wrapping the pure function endpoints.

use axum::{extract::Query, Json};
use serde::Serialize;
use std::time::Instant;

use crate::functions::{self, FunctionResponse, QueryParams};
use crate::observability::metrics;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn multiply(Query(params): Query<QueryParams>) -> FunctionResponse {
    invoke("multiply", &params, functions::multiply)
}

pub async fn divide(Query(params): Query<QueryParams>) -> FunctionResponse {
    invoke("divide", &params, functions::divide)
}

fn invoke(
    function: &'static str,
    params: &QueryParams,
    endpoint: fn(&QueryParams) -> FunctionResponse,
) -> FunctionResponse {
    let start = Instant::now();
    let response = endpoint(params);

    tracing::debug!(
        function,
        a = ?params.get("A"),
        b = ?params.get("B"),
        body = %response.body(),
        "Function invoked"
    );
    metrics::record_invocation(function, response.is_error(), start);

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::MetricKind;

    fn query(pairs: &[(&str, &str)]) -> Query<QueryParams> {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// `(function, outcome, count)` for every invocation counter.
    fn counters(recorder: &DebuggingRecorder) -> Vec<(String, String, u64)> {
        let mut out: Vec<_> = recorder
            .snapshotter()
            .snapshot()
            .into_vec()
            .into_iter()
            .filter(|(key, _, _, _)| {
                key.kind() == MetricKind::Counter
                    && key.key().name() == "function_invocations_total"
            })
            .filter_map(|(key, _, _, value)| {
                let label = |name: &str| {
                    key.key()
                        .labels()
                        .find(|l| l.key() == name)
                        .map(|l| l.value().to_string())
                        .unwrap_or_default()
                };
                match value {
                    DebugValue::Counter(n) => Some((label("function"), label("outcome"), n)),
                    _ => None,
                }
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_handlers_record_under_their_own_name() {
        let recorder = DebuggingRecorder::new();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        ::metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                assert_eq!(multiply(query(&[("A", "3"), ("B", "4")])).await.body(), "12");
                let resp = divide(query(&[("A", "1"), ("B", "0")])).await;
                assert_eq!(resp.body(), "ERROR: Division by zero");
            })
        });

        assert_eq!(
            counters(&recorder),
            vec![
                ("divide".to_string(), "error".to_string(), 1),
                ("multiply".to_string(), "ok".to_string(), 1),
            ]
        );
    }
}
