use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortviz::sorter::{ascending, descending};
use sortviz::{CancellationToken, DelayToken, Direction, Pacer, SortItem, Step, quick_sort};

// ============================================================================
// Helper Functions
// ============================================================================

/// Observer that records the step sequence and checks the flag invariants at every pause.
#[derive(Default)]
struct InvariantPacer {
    steps: Vec<Step>,
    cancel_after: Option<(usize, CancellationToken)>,
}

#[async_trait]
impl Pacer<i64> for InvariantPacer {
    async fn pause(&mut self, step: Step, items: &[SortItem<i64>]) {
        self.steps.push(step);

        let active = items.iter().filter(|i| i.active).count();
        let swapping = items.iter().filter(|i| i.swapping).count();
        let pivots = items.iter().filter(|i| i.pivot).count();
        // The partition in flight always has its pivot marked
        assert!(pivots >= 1, "no pivot marked at {step:?}");

        match step {
            Step::Compare { index, store } | Step::Swapped { index, store } => {
                assert!(items[index].active && items[store].active);
                assert!(active <= 2, "{active} active at {step:?}");
                assert_eq!(swapping, 0, "swapping left set at {step:?}");
            }
            Step::Swap { index, store } => {
                assert!(items[index].swapping && items[store].swapping);
                assert!(swapping <= 2);
            }
        }

        if let Some((limit, token)) = &self.cancel_after
            && self.steps.len() >= *limit
        {
            token.cancel();
        }
    }
}

fn random_values(rng: &mut StdRng, len: usize, max: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-max..=max)).collect()
}

fn values(items: &[SortItem<i64>]) -> Vec<i64> {
    items.iter().map(|i| i.value).collect()
}

fn sorted(mut v: Vec<i64>) -> Vec<i64> {
    v.sort();
    v
}

// ============================================================================
// Full runs
// ============================================================================

#[tokio::test]
async fn test_random_inputs_sort_ascending() {
    let mut rng = StdRng::seed_from_u64(7);
    let stop = CancellationToken::new();

    for len in 0..40 {
        let input = random_values(&mut rng, len, 20);
        let mut items = SortItem::from_values(input.clone());
        let mut pacer = InvariantPacer::default();

        quick_sort(&mut items, ascending, &mut pacer, &stop).await;

        assert_eq!(values(&items), sorted(input), "len {len}");
        assert!(items.iter().all(SortItem::is_idle));
    }
}

#[tokio::test]
async fn test_random_inputs_sort_descending() {
    let mut rng = StdRng::seed_from_u64(99);
    let stop = CancellationToken::new();

    for len in [2, 3, 10, 57] {
        let input = random_values(&mut rng, len, 5);
        let mut items = SortItem::from_values(input.clone());
        let mut pacer = InvariantPacer::default();

        quick_sort(&mut items, descending, &mut pacer, &stop).await;

        let mut expected = sorted(input);
        expected.reverse();
        assert_eq!(values(&items), expected);
        assert!(items.iter().all(SortItem::is_idle));
    }
}

#[tokio::test]
async fn test_direction_comparator_drives_order() {
    let stop = CancellationToken::new();
    let mut items = SortItem::from_values([5i64, 3, 1]);
    let mut pacer = InvariantPacer::default();

    quick_sort(&mut items, Direction::Ascending.comparator(), &mut pacer, &stop).await;
    assert_eq!(values(&items), vec![1, 3, 5]);

    quick_sort(&mut items, Direction::Descending.comparator(), &mut pacer, &stop).await;
    assert_eq!(values(&items), vec![5, 3, 1]);
}

#[tokio::test]
async fn test_equal_values_are_never_swapped() {
    let stop = CancellationToken::new();
    let mut items = SortItem::from_values([2i64, 2, 2]);
    let mut pacer = InvariantPacer::default();

    quick_sort(&mut items, ascending, &mut pacer, &stop).await;

    assert_eq!(values(&items), vec![2, 2, 2]);
    assert!(!pacer.steps.iter().any(|s| matches!(s, Step::Swap { .. })));
}

#[tokio::test]
async fn test_works_with_non_numeric_values() {
    struct Silent;

    #[async_trait]
    impl Pacer<String> for Silent {
        async fn pause(&mut self, _step: Step, _items: &[SortItem<String>]) {}
    }

    let stop = CancellationToken::new();
    let mut items = SortItem::from_values(["pear", "apple", "fig"].map(String::from));

    quick_sort(&mut items, ascending, &mut Silent, &stop).await;

    let words: Vec<&str> = items.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(words, vec!["apple", "fig", "pear"]);
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test]
async fn test_cancel_before_start_leaves_input_untouched() {
    let input = vec![4i64, -2, 9, 0, 3];
    let mut items = SortItem::from_values(input.clone());
    let stop = CancellationToken::new();
    stop.cancel();
    let mut pacer = InvariantPacer::default();

    quick_sort(&mut items, ascending, &mut pacer, &stop).await;

    assert_eq!(values(&items), input);
    assert!(items.iter().all(SortItem::is_idle));
    assert!(pacer.steps.is_empty());
    // The algorithm never clears the signal
    assert!(stop.is_cancel_requested());
}

#[tokio::test]
async fn test_cancel_mid_way_keeps_a_permutation() {
    let mut rng = StdRng::seed_from_u64(3);
    let input = random_values(&mut rng, 30, 10);

    for after in [1, 2, 3, 5, 8, 13, 21, 34, 55] {
        let stop = CancellationToken::new();
        let mut items = SortItem::from_values(input.clone());
        let mut pacer = InvariantPacer {
            cancel_after: Some((after, stop.clone())),
            ..Default::default()
        };

        quick_sort(&mut items, ascending, &mut pacer, &stop).await;

        assert_eq!(sorted(values(&items)), sorted(input.clone()));
        assert!(items.iter().all(SortItem::is_idle));
        assert!(pacer.steps.len() <= after + 2);
    }
}

#[tokio::test(start_paused = true)]
async fn test_cancel_from_another_task_during_a_pause() {
    let mut rng = StdRng::seed_from_u64(11);
    let input = random_values(&mut rng, 64, 100);
    let mut items = SortItem::from_values(input.clone());
    let stop = CancellationToken::new();
    let mut delay = DelayToken::new(10);

    let controller = stop.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(95)).await;
        controller.cancel();
    });

    let started = tokio::time::Instant::now();
    quick_sort(&mut items, ascending, &mut delay, &stop).await;

    // Roughly ten pauses ran before the stop was observed
    assert!(started.elapsed() < Duration::from_millis(200));
    assert_eq!(sorted(values(&items)), sorted(input));
    assert!(items.iter().all(SortItem::is_idle));
}

#[tokio::test(start_paused = true)]
async fn test_delay_applies_at_every_pause() {
    // [3, 2, 1]: two compares plus one swap (two pauses) in the first partition
    let mut items = SortItem::from_values([3i64, 2, 1]);
    let stop = CancellationToken::new();
    let mut delay = DelayToken::new(100);

    let started = tokio::time::Instant::now();
    quick_sort(&mut items, ascending, &mut delay, &stop).await;

    assert_eq!(values(&items), vec![1, 2, 3]);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(400) && elapsed < Duration::from_millis(410));
}
