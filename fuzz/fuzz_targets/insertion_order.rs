#![no_main]

use libfuzzer_sys::fuzz_target;

use mapgraph::{
    core::{structurally_eq, DigraphRef},
    infra::{arbitrary::MutOpsSeq, modeling::Model, testing::check_consistency},
    storage::MapDigraph,
};

fuzz_target!(|ops: MutOpsSeq<i8, i8>| {
    let mut graph = MapDigraph::<i8, i8>::new();
    let mut model: Model<i8, i8> = Model::new();

    for op in ops {
        let expected = op.clone().apply(&mut model);
        assert_eq!(op.apply(&mut graph), expected);

        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }

    assert!(structurally_eq(&graph, &model));
    assert!(graph.vertices().eq(model.vertices()));
});
