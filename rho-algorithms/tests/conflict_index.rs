use rand::{rngs::SmallRng, Rng, SeedableRng};
use rho_algorithms::{ConflictIndex, LocalSearch, Params};
use rho_challenges::cycle_rho::CycleGraph;

/// Bad node entries recomputed from scratch, sorted.
fn tally(graph: &CycleGraph) -> Vec<usize> {
    let mut expected = Vec::new();
    for (a, node) in graph.nodes.iter().enumerate() {
        if graph
            .nodes
            .iter()
            .enumerate()
            .any(|(b, other)| a != b && other.label == node.label)
        {
            expected.push(a);
        }
    }
    let lengths: Vec<usize> = graph
        .edges
        .iter()
        .map(|e| graph.distance(graph.nodes[e.left].label, graph.nodes[e.right].label))
        .collect();
    for (a, edge) in graph.edges.iter().enumerate() {
        let shared = (0..lengths.len()).any(|b| a != b && lengths[a] == lengths[b]);
        if lengths[a] == 0 || shared {
            expected.push(edge.left);
            expected.push(edge.right);
        }
    }
    expected.sort();
    expected
}

fn sorted(items: &[usize]) -> Vec<usize> {
    let mut items = items.to_vec();
    items.sort();
    items
}

#[test]
fn test_zero_length_and_duplicates_are_weighted() {
    let mut graph = CycleGraph::new(&[3]).unwrap();
    // shared label 2, zero length edge 0, lengths 3 and 3
    graph.apply_labels(&[2, 2, 5]).unwrap();
    let index = ConflictIndex::build(&graph);

    assert_eq!(sorted(index.bad_nodes()), vec![0, 0, 0, 1, 1, 1, 2, 2]);
    assert_eq!(index.score(), 8);
    assert_eq!(sorted(index.nodes_with_label(2)), vec![0, 1]);
    assert_eq!(index.edges_with_length(0), &[0]);
    assert_eq!(sorted(index.edges_with_length(3)), vec![1, 2]);
}

#[test]
fn test_three_way_label_collision() {
    let mut graph = CycleGraph::new(&[5]).unwrap();
    graph.apply_labels(&[4, 0, 4, 7, 4]).unwrap();
    let index = ConflictIndex::build(&graph);

    assert_eq!(sorted(index.nodes_with_label(4)), vec![0, 2, 4]);
    assert_eq!(sorted(index.bad_nodes()), tally(&graph));
}

#[test]
fn test_valid_labeling_has_no_bad_nodes() {
    let mut graph = CycleGraph::new(&[3]).unwrap();
    graph.apply_labels(&[0, 1, 3]).unwrap();
    let index = ConflictIndex::build(&graph);
    assert!(index.is_resolved());
    assert!(index.edges_with_length(0).is_empty());
}

#[test]
fn test_matches_scan_after_every_move() {
    for (seed, sizes) in [(1u64, vec![3]), (2, vec![3, 4, 5]), (3, vec![4, 4, 6, 9])] {
        let graph = CycleGraph::new(&sizes).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut search = LocalSearch::new(graph, Params::defaults(), SmallRng::seed_from_u64(seed));
        assert_eq!(sorted(search.index().bad_nodes()), tally(search.graph()));

        let n = search.graph().num_nodes();
        // a tiny label range forces plenty of collisions
        let max_label = 3.min(search.graph().modulus);
        for _ in 0..2000 {
            let node = rng.gen_range(0..n);
            let label = if rng.gen_bool(0.5) {
                rng.gen_range(0..max_label)
            } else {
                rng.gen_range(0..search.graph().modulus)
            };
            search.set_node(node, label);
            assert_eq!(sorted(search.index().bad_nodes()), tally(search.graph()));
        }
    }
}

#[test]
fn test_set_node_then_restore() {
    let graph = CycleGraph::new(&[3, 4, 5]).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let mut search = LocalSearch::new(graph, Params::defaults(), SmallRng::seed_from_u64(11));
    let modulus = search.graph().modulus;
    let n = search.graph().num_nodes();

    let snapshot = |search: &LocalSearch<SmallRng>| {
        let index = search.index();
        let labels: Vec<Vec<usize>> = (0..modulus).map(|l| sorted(index.nodes_with_label(l))).collect();
        let lengths: Vec<Vec<usize>> = (0..=n).map(|l| sorted(index.edges_with_length(l))).collect();
        (labels, lengths, sorted(index.bad_nodes()), search.labels())
    };

    for _ in 0..500 {
        let node = rng.gen_range(0..n);
        let old_label = search.graph().nodes[node].label;
        let before = snapshot(&search);

        search.set_node(node, rng.gen_range(0..modulus));
        search.set_node(node, old_label);
        assert_eq!(snapshot(&search), before);

        // drift to a new state before the next round trip
        search.set_node(rng.gen_range(0..n), rng.gen_range(0..modulus));
    }
}
