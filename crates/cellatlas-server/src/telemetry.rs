use axum::http::StatusCode;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

/// Per-route request accounting, rendered by the /metrics endpoint in
/// Prometheus text exposition format.
#[derive(Default)]
pub struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
    latency_ns: Mutex<HashMap<String, (u64, u64)>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
        drop(counts);
        let mut latency_map = self.latency_ns.lock().await;
        let entry = latency_map.entry(route.to_string()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += latency.as_nanos() as u64;
    }

    pub(crate) async fn render_prometheus(&self) -> String {
        let mut out = String::new();
        out.push_str("# TYPE cellatlas_requests_total counter\n");
        let counts = self.counts.lock().await;
        let mut rows: Vec<(&(String, u16), &u64)> = counts.iter().collect();
        rows.sort();
        for ((route, status), count) in rows {
            out.push_str(&format!(
                "cellatlas_requests_total{{route=\"{route}\",status=\"{status}\"}} {count}\n"
            ));
        }
        drop(counts);
        out.push_str("# TYPE cellatlas_request_latency_seconds summary\n");
        let latency = self.latency_ns.lock().await;
        let mut rows: Vec<(&String, &(u64, u64))> = latency.iter().collect();
        rows.sort();
        for (route, (count, total_ns)) in rows {
            let seconds = *total_ns as f64 / 1e9;
            out.push_str(&format!(
                "cellatlas_request_latency_seconds_sum{{route=\"{route}\"}} {seconds}\n"
            ));
            out.push_str(&format!(
                "cellatlas_request_latency_seconds_count{{route=\"{route}\"}} {count}\n"
            ));
        }
        out
    }
}
