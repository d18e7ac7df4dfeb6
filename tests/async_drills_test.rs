use drillbox::core::comprehension::{async_comprehension_with, GeneratorSettings};
use drillbox::{
    access_nested_map, async_comprehension, element_length, task_wait_n, wait_n, zoom_array,
};
use serde_json::json;
use std::time::Duration;
use tokio::time::Instant;

fn is_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[tokio::test(start_paused = true)]
async fn test_wait_n_and_task_wait_n_agree_on_shape() {
    for n in [1, 3, 10] {
        let direct = wait_n(n, 5.0).await;
        let spawned = task_wait_n(n, 5.0).await.unwrap();

        assert_eq!(direct.len(), n);
        assert_eq!(spawned.len(), n);
        assert!(is_ascending(&direct));
        assert!(is_ascending(&spawned));
    }
}

/// 一百個延遲同時進行，虛擬時間只前進最長的那一個
#[tokio::test(start_paused = true)]
async fn test_many_delays_run_concurrently() {
    let start = Instant::now();
    let delays = task_wait_n(100, 10.0).await.unwrap();

    let longest = Duration::from_secs_f64(*delays.last().unwrap());
    assert!(start.elapsed() >= longest);
    assert!(start.elapsed() < longest + Duration::from_millis(10));
}

#[tokio::test(start_paused = true)]
async fn test_comprehension_collects_generator() {
    let values = async_comprehension().await;
    assert_eq!(values.len(), 10);

    let quick = async_comprehension_with(GeneratorSettings {
        count: 0,
        ..GeneratorSettings::default()
    })
    .await;
    assert!(quick.is_empty());
}

#[test]
fn test_zoom_and_nested_access_compose() {
    let zoomed = zoom_array(&[12, 72, 91], 3);
    let payload = json!({"zoom": {"values": zoomed}});

    let values = access_nested_map(&payload, &["zoom", "values"]).unwrap();
    assert_eq!(values.as_array().map(Vec::len), Some(9));

    let err = access_nested_map(&payload, &["zoom", "factor"]).unwrap_err();
    assert_eq!(err.to_string(), "factor");
}

#[test]
fn test_element_length_counts_characters() {
    let lengths = element_length(["héllo", "abc", ""]);
    assert_eq!(lengths, vec![("héllo", 5), ("abc", 3), ("", 0)]);
}

#[tokio::test(start_paused = true)]
async fn test_huge_max_delay_does_not_panic() {
    let delays = wait_n(3, 1e300).await;
    assert_eq!(delays.len(), 3);
    assert!(is_ascending(&delays));
}
