use futures::stream::{self, Stream, StreamExt};
use rand::Rng;
use std::time::Duration;
use tokio::time::Instant;

/// Settings for [`async_generator_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    pub count: usize,
    pub interval: Duration,
    pub upper_bound: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            count: 10,
            interval: Duration::from_secs(1),
            upper_bound: 10.0,
        }
    }
}

/// Ten floats in `[0, 10]`, one per second.
pub fn async_generator() -> impl Stream<Item = f64> + Send {
    async_generator_with(GeneratorSettings::default())
}

pub fn async_generator_with(settings: GeneratorSettings) -> impl Stream<Item = f64> + Send {
    stream::unfold(0usize, move |produced| async move {
        if produced >= settings.count {
            return None;
        }
        tokio::time::sleep(settings.interval).await;

        let bound = if settings.upper_bound.is_finite() && settings.upper_bound > 0.0 {
            settings.upper_bound
        } else {
            0.0
        };
        let value = rand::thread_rng().gen_range(0.0..=bound);
        Some((value, produced + 1))
    })
}

/// Collect everything [`async_generator`] yields.
pub async fn async_comprehension() -> Vec<f64> {
    async_generator().collect().await
}

pub async fn async_comprehension_with(settings: GeneratorSettings) -> Vec<f64> {
    async_generator_with(settings).collect().await
}

/// Run four comprehensions in parallel and report how long that took.
pub async fn measure_runtime() -> Duration {
    measure_runtime_with(GeneratorSettings::default()).await
}

pub async fn measure_runtime_with(settings: GeneratorSettings) -> Duration {
    let start = Instant::now();
    let (a, b, c, d) = tokio::join!(
        async_comprehension_with(settings),
        async_comprehension_with(settings),
        async_comprehension_with(settings),
        async_comprehension_with(settings),
    );
    let elapsed = start.elapsed();

    tracing::debug!(
        "Four comprehensions collected {} values in {:?}",
        a.len() + b.len() + c.len() + d.len(),
        elapsed
    );
    elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_async_generator_yields_ten_values() {
        let start = Instant::now();
        let values: Vec<f64> = async_generator().collect().await;

        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| (0.0..=10.0).contains(v)));
        assert!(start.elapsed() >= Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_generator_waits_before_each_value() {
        let start = Instant::now();
        let mut generator = Box::pin(async_generator());

        generator.next().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(1));

        generator.next().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_comprehension() {
        let values = async_comprehension().await;
        assert_eq!(values.len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_settings() {
        let settings = GeneratorSettings {
            count: 3,
            interval: Duration::from_millis(50),
            upper_bound: 1.0,
        };
        let values = async_comprehension_with(settings).await;

        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_measure_runtime_runs_in_parallel() {
        let elapsed = measure_runtime().await;

        assert!(elapsed >= Duration::from_secs(10));
        assert!(elapsed < Duration::from_secs(11));
    }
}
