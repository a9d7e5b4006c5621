//! S6 -- the deleter fails once for a path, then succeeds on a later
//! sweep; `deleted` must flip to true exactly once. The producing task's
//! directory is kept alive by a second, still-incomplete consumer so the
//! path delete genuinely goes through the deleter rather than being
//! short-circuited by an already-deleted producer.

use crate::prelude::*;

#[test]
fn a_failed_delete_is_retried_on_the_next_event_and_flips_deleted_once() {
    let (engine, deleter, _cache) = engine_with_handles();
    engine.workflow_begin(&diamond_dag());

    let mut task_a = sample_task("tA", "A", "aaaa9999");
    task_a.outputs = vec![
        unpublished_output("/work/tA/fA"),
        unpublished_output("/work/tA/gA"),
    ];
    engine.task_pending(&task_a).unwrap();
    engine.task_complete(&task_a).unwrap();

    let mut task_b = sample_task("tB", "B", "bbbb0001");
    task_b.inputs = [("fa".to_string(), PathBuf::from("/work/tA/fA"))].into();
    engine.task_pending(&task_b).unwrap();
    engine.task_complete(&task_b).unwrap();

    // tC still pending: tA's own directory stays blocked, but fA's path
    // predicate only cares about fA's own (already-completed) consumer.
    let mut task_c = sample_task("tC", "C", "cccc0002");
    task_c.inputs = [("ga".to_string(), PathBuf::from("/work/tA/gA"))].into();
    engine.task_pending(&task_c).unwrap();

    deleter.fail_next("/work/tA/fA", 1);

    engine.process_closed("B").unwrap();
    engine.process_closed("C").unwrap();
    assert_eq!(
        engine.report().tasks_deleted,
        0,
        "tA is blocked on tC, tB is blocked on D never closing"
    );
    assert_eq!(
        engine.report().paths_deleted,
        0,
        "the first delete attempt on fA failed"
    );

    // A later event re-sweeps; the deleter now succeeds.
    engine.process_closed("B").unwrap();
    assert_eq!(engine.report().paths_deleted, 1);
    assert_eq!(deleter.call_count("/work/tA/fA"), 2);
}
