use graph_plot::api::{nice_tick_step, nice_ticks};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ticks_cover_range_with_uniform_round_steps(
        min_val in -10_000.0f64..10_000.0,
        span in 0.0f64..10_000.0,
        target in 1usize..16
    ) {
        let max_val = min_val + span;
        let step = nice_tick_step(min_val, max_val, target);
        let ticks = nice_ticks(min_val, max_val, target);

        prop_assert!(!ticks.is_empty());
        prop_assert!(step >= 1.0);
        let base = if max_val - min_val <= 20.0 {
            1.0
        } else if max_val - min_val <= 50.0 {
            5.0
        } else {
            10.0
        };
        prop_assert_eq!(step % base, 0.0);

        let first = ticks[0];
        let last = ticks[ticks.len() - 1];
        prop_assert!(first <= min_val + 1e-9);
        prop_assert!(last >= max_val - 1e-6);
        prop_assert!(first >= min_val - step - 1e-9);
        prop_assert!(last <= max_val + step + 1e-9);
        prop_assert_eq!(first % step, 0.0);

        for pair in ticks.windows(2) {
            prop_assert!(((pair[1] - pair[0]) - step).abs() <= 1e-9);
        }
    }

    #[test]
    fn ticks_are_a_pure_function_of_their_inputs(
        min_val in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0
    ) {
        let max_val = min_val + span;
        prop_assert_eq!(nice_ticks(min_val, max_val, 8), nice_ticks(min_val, max_val, 8));
    }
}
