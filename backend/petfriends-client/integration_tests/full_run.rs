// The whole catalog, the way the runner executes it

use crate::support::TestHarness;

use petfriends_client::scenarios;

use std::collections::HashSet;

/// **VALUE**: Executes the entire catalog in order against a single
/// double - serial execution over one shared inventory, exactly the
/// shape of a live run.
///
/// **WHY THIS MATTERS**: The per-scenario tests run isolated; only this
/// test proves the catalog's ordering assumptions hold when scenarios
/// see each other's leftovers (created pets surviving into the
/// mutation block, deletions emptying the owned listing, and so on).
#[tokio::test]
async fn given_fresh_service_when_running_full_catalog_then_every_scenario_passes() {
    let harness = TestHarness::start().await;

    for scenario in scenarios::catalog() {
        scenario
            .execute(harness.context())
            .await
            .unwrap_or_else(|e| panic!("scenario {} did not pass: {e}", scenario.name));
    }
}

#[test]
fn given_catalog_when_inspecting_then_names_are_unique_and_complete() {
    let catalog = scenarios::catalog();
    let names: HashSet<_> = catalog.iter().map(|scenario| scenario.name).collect();

    assert_eq!(names.len(), catalog.len(), "scenario names must be unique");
    assert_eq!(catalog.len(), 15);
}
