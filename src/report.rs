//! Benchmark report over the recorded key-value and CAS samples

use serde::Serialize;
use std::fmt::Write;

/// Recorded key-value request latencies, in milliseconds
pub const KEYVALUE_LATENCIES: &[f64] = &[12.0, 15.5, 9.25, 20.0, 11.75, 14.5, 18.0, 10.0];

/// One recorded CAS transfer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CasOperation {
    /// Bytes transferred
    pub bytes: u64,
    /// Wall time in seconds
    pub seconds: f64,
}

/// Recorded CAS transfers
pub const CAS_OPERATIONS: &[CasOperation] = &[
    CasOperation {
        bytes: 5_242_880,
        seconds: 0.5,
    },
    CasOperation {
        bytes: 10_485_760,
        seconds: 1.0,
    },
    CasOperation {
        bytes: 2_097_152,
        seconds: 0.25,
    },
    CasOperation {
        bytes: 1_048_576,
        seconds: 0.25,
    },
];

const BYTES_PER_MB: f64 = 1_000_000.0;

/// Aggregates over a latency sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencySummary {
    /// Number of samples
    pub count: usize,
    /// Sum of all samples
    pub sum: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// `sum / count`
    pub average: f64,
}

/// Aggregates over CAS transfers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThroughputSummary {
    /// Number of operations
    pub operations: usize,
    /// Total bytes moved
    pub total_bytes: u64,
    /// Total seconds spent
    pub total_seconds: f64,
    /// `total_bytes / total_seconds` in MB/s
    pub throughput_mb_s: f64,
}

/// Both summaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Key-value latency summary
    pub keyvalue: Option<LatencySummary>,
    /// CAS throughput summary
    pub cas: Option<ThroughputSummary>,
}

/// Summarize latencies; `None` for an empty sample
pub fn summarize_latencies(samples: &[f64]) -> Option<LatencySummary> {
    if samples.is_empty() {
        return None;
    }

    let sum: f64 = samples.iter().sum();
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    #[allow(clippy::cast_precision_loss)]
    let average = sum / samples.len() as f64;

    Some(LatencySummary {
        count: samples.len(),
        sum,
        min,
        max,
        average,
    })
}

/// Summarize transfers; `None` when empty or no time was spent
pub fn summarize_throughput(operations: &[CasOperation]) -> Option<ThroughputSummary> {
    let total_bytes: u64 = operations.iter().map(|op| op.bytes).sum();
    let total_seconds: f64 = operations.iter().map(|op| op.seconds).sum();
    if operations.is_empty() || total_seconds <= 0.0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let throughput_mb_s = total_bytes as f64 / total_seconds / BYTES_PER_MB;

    Some(ThroughputSummary {
        operations: operations.len(),
        total_bytes,
        total_seconds,
        throughput_mb_s,
    })
}

/// Report over the recorded samples
pub fn recorded_report() -> Report {
    Report {
        keyvalue: summarize_latencies(KEYVALUE_LATENCIES),
        cas: summarize_throughput(CAS_OPERATIONS),
    }
}

/// Plain-text rendering
pub fn render(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Key-value latencies");
    match &report.keyvalue {
        Some(s) => {
            let _ = writeln!(out, "  samples: {}", s.count);
            let _ = writeln!(out, "  sum:     {:.2} ms", s.sum);
            let _ = writeln!(out, "  min:     {:.2} ms", s.min);
            let _ = writeln!(out, "  max:     {:.2} ms", s.max);
            let _ = writeln!(out, "  average: {:.3} ms", s.average);
        }
        None => {
            let _ = writeln!(out, "  no samples");
        }
    }

    let _ = writeln!(out, "CAS operations");
    match &report.cas {
        Some(s) => {
            let _ = writeln!(out, "  operations: {}", s.operations);
            let _ = writeln!(out, "  bytes:      {}", s.total_bytes);
            let _ = writeln!(out, "  time:       {:.2} s", s.total_seconds);
            let _ = writeln!(out, "  throughput: {:.2} MB/s", s.throughput_mb_s);
        }
        None => {
            let _ = writeln!(out, "  no samples");
        }
    }

    out
}
