//! REGRESSION: compare must price tenures outside the limits as asked
//!
//! Bug: `compare --to 10` silently stopped at the configured maximum. The
//! limits only pick the default range; an explicit range is priced in full.

use crate::common::TestEnv;

#[test]
fn regression_compare_beyond_limit_maximum() {
    let env = TestEnv::new();
    let result = env.run(&["compare", "--from", "6", "--to", "10", "--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let years: Vec<u64> = result
        .events_named("tenure")
        .iter()
        .map(|row| row["tenure_years"].as_u64().unwrap())
        .collect();
    assert_eq!(years, vec![6, 7, 8, 9, 10]);
}
