use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::LfuMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for cache metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be served
/// from a scrape endpoint or forwarded to a collector.
///
/// ```
/// use lfukit::metrics::exporter::PrometheusTextExporter;
/// use lfukit::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
/// use lfukit::policy::lfu::LfuCache;
/// use lfukit::traits::CoreCache;
///
/// let mut cache = LfuCache::new(4);
/// cache.insert(1, "one");
/// cache.get(&1);
///
/// let exporter = PrometheusTextExporter::new("lfu", Vec::new());
/// exporter.export(&cache.snapshot());
/// let text = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(text.contains("lfu_get_hits_total 1"));
/// ```
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<LfuMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &LfuMetricsSnapshot) {
        let counters = [
            ("get_calls_total", snapshot.get_calls),
            ("get_hits_total", snapshot.get_hits),
            ("get_misses_total", snapshot.get_misses),
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_updates_total", snapshot.insert_updates),
            ("insert_new_total", snapshot.insert_new),
            ("evict_calls_total", snapshot.evict_calls),
            ("evicted_entries_total", snapshot.evicted_entries),
            ("clear_calls_total", snapshot.clear_calls),
            ("pop_lfu_calls_total", snapshot.pop_lfu_calls),
            ("pop_lfu_found_total", snapshot.pop_lfu_found),
            ("peek_lfu_calls_total", snapshot.peek_lfu_calls),
            ("peek_lfu_found_total", snapshot.peek_lfu_found),
            ("frequency_calls_total", snapshot.frequency_calls),
            ("frequency_found_total", snapshot.frequency_found),
            (
                "increment_frequency_calls_total",
                snapshot.increment_frequency_calls,
            ),
            (
                "increment_frequency_found_total",
                snapshot.increment_frequency_found,
            ),
        ];
        for (suffix, value) in counters {
            self.write_counter(&self.metric_name(suffix), value);
        }

        self.write_gauge(&self.metric_name("cache_len"), snapshot.cache_len as u64);
        self.write_gauge(
            &self.metric_name("bucket_count"),
            snapshot.bucket_count as u64,
        );
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
