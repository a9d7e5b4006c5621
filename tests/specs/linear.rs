//! S1 -- linear DAG A -> B, neither task publishes.

use crate::prelude::*;

#[test]
fn neither_task_nor_file_is_deletable_until_the_consuming_process_closes() {
    let engine = engine();
    engine.workflow_begin(&linear_dag());

    let mut task_a = sample_task("tA", "A", "aaaa1111");
    task_a.outputs = vec![unpublished_output("/work/tA/fA")];
    engine.task_pending(&task_a).unwrap();
    engine.task_complete(&task_a).unwrap();

    let mut task_b = sample_task("tB", "B", "bbbb2222");
    task_b.inputs = [("fa".to_string(), PathBuf::from("/work/tA/fA"))].into();
    task_b.outputs = vec![unpublished_output("/work/tB/fB")];
    engine.task_pending(&task_b).unwrap();
    engine.task_complete(&task_b).unwrap();

    // Process A producing the shared file has no effect on its own task's
    // deletability -- what gates it is A's downstream consumer process B.
    engine.process_closed("A").unwrap();
    let report = engine.report();
    assert_eq!(report.tasks_deleted, 0);
    assert_eq!(report.paths_deleted, 0);

    engine.process_closed("B").unwrap();
    let report = engine.report();
    assert_eq!(report.tasks_deleted, 2, "both tA and tB directories reclaimed");
    assert_eq!(report.paths_deleted, 2, "both fA and fB reclaimed");
}

#[test]
fn cache_finalize_records_carry_the_correct_consumer_hash_lists() {
    let (engine, _deleter, cache) = engine_with_handles();
    engine.workflow_begin(&linear_dag());

    let mut task_a = sample_task("tA", "A", "aaaa1111");
    task_a.outputs = vec![unpublished_output("/work/tA/fA")];
    engine.task_pending(&task_a).unwrap();
    engine.task_complete(&task_a).unwrap();

    let mut task_b = sample_task("tB", "B", "bbbb2222");
    task_b.inputs = [("fa".to_string(), PathBuf::from("/work/tA/fA"))].into();
    task_b.outputs = vec![unpublished_output("/work/tB/fB")];
    engine.task_pending(&task_b).unwrap();
    engine.task_complete(&task_b).unwrap();

    engine.process_closed("A").unwrap();
    engine.process_closed("B").unwrap();

    let calls = cache.calls();
    let for_a = calls
        .iter()
        .find(|r| r.task_hash == "aaaa1111")
        .expect("tA finalize record");
    assert_eq!(for_a.consumer_hashes, vec!["bbbb2222".to_string()]);

    let for_b = calls
        .iter()
        .find(|r| r.task_hash == "bbbb2222")
        .expect("tB finalize record");
    assert!(for_b.consumer_hashes.is_empty());
}
