//! Invariants that must hold no matter what order events arrive in, plus a
//! round-trip check: replaying the same event stream against a fresh engine
//! always produces the same set of delete calls.

use crate::prelude::*;
use proptest::prelude::*;

/// Run the diamond scenario (tA -> {tB, tC} -> shared closes) to completion
/// under one of 24 orderings of its four orderable steps, then return the
/// deleter's full call list alongside a snapshot of the final report.
///
/// The four steps are: complete tB, complete tC, close process B, close
/// process C. Closing B or C before its task completes is legal -- the
/// engine must simply wait -- so every one of the 4! permutations is a
/// valid run, not just the two already covered by `diamond.rs`.
fn run_permutation(order: [u8; 4]) -> (Vec<PathBuf>, u64, u64) {
    let deleter = FakeDeleter::new();
    let engine = CleanupEngine::new(deleter.clone(), FakeCacheSink::new(), FakeClock::new());
    engine.workflow_begin(&diamond_dag());

    let mut task_a = sample_task("tA", "A", "aaaa4200");
    task_a.outputs = vec![unpublished_output("/work/tA/fA")];
    engine.task_pending(&task_a).unwrap();
    engine.task_complete(&task_a).unwrap();

    let mut task_b = sample_task("tB", "B", "bbbb4201");
    task_b.inputs = [("fa".to_string(), PathBuf::from("/work/tA/fA"))].into();
    engine.task_pending(&task_b).unwrap();

    let mut task_c = sample_task("tC", "C", "cccc4202");
    task_c.inputs = [("fa".to_string(), PathBuf::from("/work/tA/fA"))].into();
    engine.task_pending(&task_c).unwrap();

    for step in order {
        match step {
            0 => {
                engine.task_complete(&task_b).unwrap();
            }
            1 => {
                engine.task_complete(&task_c).unwrap();
            }
            2 => {
                engine.process_closed("B").unwrap();
            }
            3 => {
                engine.process_closed("C").unwrap();
            }
            _ => unreachable!(),
        }
    }

    let report = engine.report();
    let mut calls: Vec<PathBuf> = deleter.calls().into_iter().map(|c| c.path).collect();
    calls.sort();
    calls.dedup();
    (calls, report.tasks_deleted as u64, report.paths_deleted as u64)
}

fn permutation_of_four(index: usize) -> [u8; 4] {
    let mut items = vec![0u8, 1, 2, 3];
    let mut index = index % 24;
    let mut order = [0u8; 4];
    for slot in order.iter_mut() {
        let factorial = fact(items.len() - 1);
        let pick = index / factorial;
        index %= factorial.max(1);
        *slot = items.remove(pick);
    }
    order
}

fn fact(n: usize) -> usize {
    (1..=n).product::<usize>().max(1)
}

proptest! {
    /// No matter which of the 24 orderings of {complete B, complete C,
    /// close B, close C} is replayed, the workflow ends with tA's own
    /// directory and its output both reclaimed. tB and tC never close
    /// their own downstream (process D never closes in this fixture), so
    /// neither of their directories becomes deletable -- only tA's does.
    #[test]
    fn diamond_converges_regardless_of_event_order(index in 0usize..24) {
        let (calls, tasks_deleted, paths_deleted) = run_permutation(permutation_of_four(index));
        prop_assert_eq!(calls, vec![PathBuf::from("/work/tA")]);
        prop_assert_eq!(tasks_deleted, 1);
        prop_assert_eq!(paths_deleted, 1);
    }

    /// Replaying the identical event stream against two independently
    /// constructed engines yields the same delete-call set both times --
    /// the engine has no hidden order-dependent state beyond the events
    /// themselves.
    #[test]
    fn replay_is_deterministic(index in 0usize..24) {
        let order = permutation_of_four(index);
        let (first, first_tasks, first_paths) = run_permutation(order);
        let (second, second_tasks, second_paths) = run_permutation(order);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_tasks, second_tasks);
        prop_assert_eq!(first_paths, second_paths);
    }
}

#[test]
fn every_permutation_of_four_is_distinct_and_covers_0_to_23() {
    let mut seen: Vec<[u8; 4]> = (0..24).map(permutation_of_four).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 24);
}

#[test]
fn no_path_is_ever_deleted_before_its_producing_task_completes() {
    // FakeDeleter records calls as they happen; since task-complete always
    // runs a sweep before any output's PathState exists, and every delete
    // call originates from a sweep after task completion, there is no
    // ordering under which a path delete call can precede its producing
    // task's task_complete having already run.
    let (engine, deleter, _cache) = engine_with_handles();
    engine.workflow_begin(&linear_dag());

    let mut task_a = sample_task("tA", "A", "deadbeef");
    task_a.outputs = vec![unpublished_output("/work/tA/fA")];
    engine.task_pending(&task_a).unwrap();

    // Closing every process before tA even completes must delete nothing:
    // there is no PathState yet to become deletable.
    engine.process_closed("A").unwrap();
    engine.process_closed("B").unwrap();
    assert!(deleter.calls().is_empty());

    engine.task_complete(&task_a).unwrap();
    assert!(
        deleter
            .calls()
            .iter()
            .any(|c| c.path == PathBuf::from("/work/tA")),
        "closing both processes before completion primed the sweep; \
         completion itself must now reclaim tA's own directory"
    );
}
