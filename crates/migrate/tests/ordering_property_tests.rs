//! Property tests for the export ordering invariant.

mod common;

use common::*;
use nerdgraph_client::testing::{Reply, Rule, ScriptedExecutor};
use nerdgraph_config::DashboardReference;
use nerdgraph_migrate::{RecordingEvents, export_all};
use proptest::prelude::*;
use std::time::Duration;

/// One configured item: its simulated latency and whether the fetch fails.
fn item() -> impl Strategy<Value = (u64, bool)> {
    (0u64..50, any::<bool>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn export_returns_one_sorted_outcome_per_reference(
        items in prop::collection::vec(item(), 0..24),
        concurrency in 1usize..8,
    ) {
        let executor = items.iter().enumerate().fold(
            ScriptedExecutor::new(),
            |executor, (i, (delay, fails))| {
                let guid = format!("g{i}");
                let rule = if *fails {
                    Rule::operation("DashboardEntity")
                        .with_variable("/guid", guid.as_str())
                        .reply(Reply::error(format!("failed {i}")))
                        .after(Duration::from_millis(*delay))
                } else {
                    slow_entity_rule(&guid, &format!("D{i}"), *delay)
                };
                executor.with_rule(rule)
            },
        );
        let references: Vec<DashboardReference> = (0..items.len())
            .map(|i| DashboardReference::by_guid(i, format!("g{i}")))
            .collect();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let outcomes = runtime.block_on(export_all(
            &executor,
            &references,
            SOURCE,
            concurrency,
            &RecordingEvents::new(),
        ));

        prop_assert_eq!(outcomes.len(), items.len());
        for (position, outcome) in outcomes.iter().enumerate() {
            prop_assert_eq!(outcome.index(), position);
            prop_assert_eq!(outcome.is_success(), !items[position].1);
        }
        prop_assert!(executor.peak_in_flight() <= concurrency);
    }
}
