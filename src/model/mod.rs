//! Fraud classifier - model evaluation and inference accounting

pub mod encoder;
pub mod gbt;

pub use encoder::LabelEncoder;
pub use gbt::GbtModel;

use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

/// Latency stats
static LATENCY_SUM_US: AtomicU64 = AtomicU64::new(0);
static INFERENCE_COUNT: AtomicU64 = AtomicU64::new(0);

/// Engine status for the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStats {
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

/// Record one completed inference
pub fn record_inference(elapsed_us: u64) {
    LATENCY_SUM_US.fetch_add(elapsed_us, Ordering::Relaxed);
    INFERENCE_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn engine_stats() -> EngineStats {
    let sum = LATENCY_SUM_US.load(Ordering::Relaxed);
    let count = INFERENCE_COUNT.load(Ordering::Relaxed);
    let avg = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };

    EngineStats {
        inference_count: count,
        avg_latency_ms: avg,
    }
}
