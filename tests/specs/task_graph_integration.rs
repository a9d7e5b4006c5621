//! `TaskGraph` is fed the same task-pending / task-output notifications
//! as the engine, but is an entirely independent component with its own
//! mutex -- no reference to `CleanupEngine` or vice versa.

use crate::prelude::*;
use reap_core::TaskGraph;

#[test]
fn task_graph_tracks_the_reverse_index_alongside_the_engine() {
    let engine = engine();
    let graph = TaskGraph::new();
    engine.workflow_begin(&linear_dag());

    let mut task_a = sample_task("tA", "A", "aabbccdd00112233");
    task_a.outputs = vec![unpublished_output("/work/tA/fA")];

    graph.add_task(&task_a).unwrap();
    engine.task_pending(&task_a).unwrap();

    graph.add_task_outputs(&task_a).unwrap();
    engine.task_complete(&task_a).unwrap();

    assert_eq!(
        graph.producer_task(&PathBuf::from("/work/tA/fA")),
        Some(TaskId::new("tA"))
    );
    let vertex = graph.producer_vertex(&PathBuf::from("/work/tA/fA")).unwrap();
    assert_eq!(vertex.label, "[aa/bbccdd] A (tA)");
    assert_eq!(vertex.index, 0);

    engine.process_closed("A").unwrap();
    engine.process_closed("B").unwrap();

    // The engine has since deleted tA's directory, but the graph -- an
    // append-only record for resume/reporting -- still remembers it.
    assert_eq!(engine.report().tasks_deleted, 1);
    assert_eq!(graph.vertices().len(), 1);
}
