//! S3 -- a downstream task fails; its upstream input still becomes
//! deletable, and the failed task is excluded from the cache-finalize
//! consumer list.

use crate::prelude::*;

#[test]
fn failed_consumer_still_unblocks_its_input_and_is_excluded_from_finalize() {
    let (engine, _deleter, cache) = engine_with_handles();
    engine.workflow_begin(&linear_dag());

    let mut task_a = sample_task("tA", "A", "aaaa0001");
    task_a.outputs = vec![unpublished_output("/work/tA/fA")];
    engine.task_pending(&task_a).unwrap();
    engine.task_complete(&task_a).unwrap();

    let mut task_b = sample_task("tB", "B", "bbbb0002");
    task_b.inputs = [("fa".to_string(), PathBuf::from("/work/tA/fA"))].into();
    task_b.success = false;
    engine.task_pending(&task_b).unwrap();
    engine.task_complete(&task_b).unwrap();

    engine.process_closed("B").unwrap();

    let report = engine.report();
    assert_eq!(report.paths_deleted, 1, "fA is deletable once B closes");
    assert_eq!(report.tasks_deleted, 2, "both tA and the failed tB are reclaimed");

    let calls = cache.calls();
    let for_a = calls
        .iter()
        .find(|r| r.task_hash == "aaaa0001")
        .expect("tA finalize record");
    assert!(
        for_a.consumer_hashes.is_empty(),
        "failed consumer omitted from the hash list"
    );
}
