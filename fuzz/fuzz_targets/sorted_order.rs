#![no_main]

use libfuzzer_sys::fuzz_target;

use mapgraph::{
    core::{structurally_eq, DigraphRef},
    infra::{arbitrary::MutOpsSeq, modeling::Model, testing::check_consistency},
    storage::{MapDigraph, SortedOrder},
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph: MapDigraph<i8, i8, SortedOrder> = MapDigraph::sorted();
    let mut model: Model<i8, i8> = Model::new();

    // Cursor positions depend on the order, which the model does not share.
    for op in ops.into_iter().filter(|op| !op.uses_cursor()) {
        let expected = op.clone().apply(&mut model);
        assert_eq!(op.apply(&mut graph), expected);

        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }

    assert!(structurally_eq(&graph, &model));
    let vertices = graph.vertices().collect::<Vec<_>>();
    assert!(vertices.windows(2).all(|pair| pair[0] < pair[1]));
});
