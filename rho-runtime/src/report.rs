use rho_algorithms::ConflictIndex;
use rho_challenges::cycle_rho::{CycleGraph, Validation};
use std::fmt::Write;

/// Per cycle, every node's `cycle.position` and label, then the labels of
/// any remaining bad nodes.
pub fn format_labeling(graph: &CycleGraph, index: &ConflictIndex) -> String {
    let mut out = String::new();
    for (cycle_index, &head) in graph.heads.iter().enumerate() {
        for (position, node) in graph.cycle(head).enumerate() {
            let _ = writeln!(
                out,
                "Node {}.{}:\t{}",
                cycle_index + 1,
                position + 1,
                graph.nodes[node].label
            );
        }
        out.push('\n');
    }
    if !index.is_resolved() {
        out.push_str("\nBad Nodes:\n");
        for &node in index.bad_nodes() {
            let _ = write!(out, "{} ", graph.nodes[node].label);
        }
    }
    out.push('\n');
    out
}

/// Full report: the labeling followed by the validation verdict. The
/// validator only runs once no conflict is left.
pub fn format_report(graph: &CycleGraph, index: &ConflictIndex) -> String {
    let validation = if index.is_resolved() {
        rho_challenges::cycle_rho::validate(graph)
    } else {
        Validation::NotGood
    };
    format!("{}\n{}", format_labeling(graph, index), validation)
}

/// Each node (labelled by its arena index) with its successor and predecessor.
pub fn format_adjacency(graph: &CycleGraph) -> String {
    let mut out = String::new();
    for &head in &graph.heads {
        for node in graph.cycle(head) {
            let _ = writeln!(
                out,
                "Node {}:\t{}, {}",
                node,
                graph.successor(node),
                graph.predecessor(node)
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_validated_triangle() {
        let mut graph = CycleGraph::new(&[3]).unwrap();
        graph.apply_labels(&[0, 1, 3]).unwrap();
        let index = ConflictIndex::build(&graph);

        assert_eq!(
            format_report(&graph, &index),
            "Node 1.1:\t0\nNode 1.2:\t1\nNode 1.3:\t3\n\n\n\nValidated!"
        );
    }

    #[test]
    fn test_report_lists_bad_nodes() {
        let mut graph = CycleGraph::new(&[3]).unwrap();
        graph.apply_labels(&[2, 2, 5]).unwrap();
        let index = ConflictIndex::build(&graph);

        let report = format_report(&graph, &index);
        assert!(report.contains("\nBad Nodes:\n"));
        assert!(report.ends_with("Not Good!"));
    }

    #[test]
    fn test_adjacency_walks_each_cycle() {
        let graph = CycleGraph::new(&[3, 4]).unwrap();
        assert_eq!(
            format_adjacency(&graph),
            "Node 0:\t1, 2\nNode 1:\t2, 0\nNode 2:\t0, 1\n\
             Node 3:\t4, 6\nNode 4:\t5, 3\nNode 5:\t6, 4\nNode 6:\t3, 5\n"
        );
    }
}
