use crate::utils::error::{DrillError, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use rand::Rng;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

pub const DEFAULT_MAX_DELAY: f64 = 10.0;

/// 在 `[0, max_delay]` 之間取一個均勻分布的秒數。
///
/// 非正數或非有限值一律當成 0，避免 `Duration` 轉換失敗。
fn draw_delay(max_delay: f64) -> f64 {
    if !(max_delay.is_finite() && max_delay > 0.0) {
        return 0.0;
    }
    rand::thread_rng().gen_range(0.0..=max_delay)
}

/// Sleep for a random duration of at most `max_delay` seconds and return it.
pub async fn wait_random(max_delay: f64) -> f64 {
    let delay = draw_delay(max_delay);
    tracing::debug!("Waiting {:.3}s (max {})", delay, max_delay);
    tokio::time::sleep(delay_duration(delay)).await;
    delay
}

/// 超出 `Duration` 可表示範圍的秒數飽和到 `Duration::MAX`。
fn delay_duration(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

/// Schedule [`wait_random`] as its own task. Must be called inside a Tokio runtime.
pub fn task_wait_random(max_delay: f64) -> JoinHandle<f64> {
    tokio::spawn(wait_random(max_delay))
}

/// Run `n` delays concurrently and return them in ascending order.
pub async fn wait_n(n: usize, max_delay: f64) -> Vec<f64> {
    let pending: FuturesUnordered<_> = (0..n).map(|_| wait_random(max_delay)).collect();

    // 依完成順序收集
    let delays: Vec<f64> = pending.collect().await;
    tracing::debug!("Collected {} delays", delays.len());

    insertion_sort(delays)
}

/// Same as [`wait_n`], but every delay runs as a spawned task.
pub async fn task_wait_n(n: usize, max_delay: f64) -> Result<Vec<f64>> {
    let pending: FuturesUnordered<_> = (0..n).map(|_| task_wait_random(max_delay)).collect();
    join_sorted(pending).await
}

/// Drain spawned delays in completion order. On the first failed join the
/// remaining tasks are aborted before the error is returned.
async fn join_sorted(mut pending: FuturesUnordered<JoinHandle<f64>>) -> Result<Vec<f64>> {
    let mut delays = Vec::with_capacity(pending.len());
    while let Some(joined) = pending.next().await {
        match joined {
            Ok(delay) => delays.push(delay),
            Err(e) => {
                tracing::warn!("Delay task failed, aborting {} remaining", pending.len());
                for handle in pending.iter() {
                    handle.abort();
                }
                return Err(e.into());
            }
        }
    }
    tracing::debug!("Collected {} task delays", delays.len());

    Ok(insertion_sort(delays))
}

/// Stable ascending insertion sort; equal values keep their arrival order.
pub fn insertion_sort<T: PartialOrd>(values: Vec<T>) -> Vec<T> {
    let mut sorted: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        let position = sorted
            .iter()
            .position(|existing| value < *existing)
            .unwrap_or(sorted.len());
        sorted.insert(position, value);
    }
    sorted
}

/// Average wall time per delay of one [`wait_n`] run, in seconds.
///
/// Builds its own runtime, so it must not be called from async context.
pub fn measure_time(n: usize, max_delay: f64) -> Result<f64> {
    if n == 0 {
        return Err(DrillError::ValidationError {
            message: "n must be at least 1 to measure an average".to_string(),
        });
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let start = Instant::now();
    runtime.block_on(wait_n(n, max_delay));
    let total = start.elapsed();

    tracing::info!("wait_n({}, {}) took {:?}", n, max_delay, total);
    Ok(total.as_secs_f64() / n as f64)
}
