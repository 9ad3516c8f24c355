//! Property tests for reachability over the module graph.

use std::collections::BTreeSet;

use proptest::prelude::*;

use assetline::DependencyGraph;

fn name(i: usize) -> String {
    format!("m{i}")
}

/// (node count, edges, roots) over `m0..mN`
fn graph_input() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<usize>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..24),
            proptest::collection::vec(0..n, 0..4),
        )
    })
}

fn build(n: usize, edges: &[(usize, usize)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for i in 0..n {
        graph.add_module(&name(i));
    }
    for (from, to) in edges {
        graph.add_dependency(&name(*from), &name(*to));
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The live set is closed under dependencies.
    #[test]
    fn property_live_set_is_closed((n, edges, roots) in graph_input()) {
        let graph = build(n, &edges);
        let roots: Vec<String> = roots.into_iter().map(name).collect();
        let live = graph.reachable(roots.iter().map(String::as_str));

        for root in &roots {
            prop_assert!(live.contains(root));
        }
        for (from, to) in &edges {
            let (from, to) = (name(*from), name(*to));
            if live.contains(&from) {
                prop_assert!(live.contains(&to), "{} -> {} escaped the live set", from, to);
            }
        }
    }

    /// PROPERTY: Live and dead partition the graph.
    #[test]
    fn property_live_and_dead_partition((n, edges, roots) in graph_input()) {
        let graph = build(n, &edges);
        let roots: Vec<String> = roots.into_iter().map(name).collect();
        let live = graph.reachable(roots.iter().map(String::as_str));
        let dead = graph.dead(roots.iter().map(String::as_str));

        prop_assert!(live.is_disjoint(&dead));
        let all: BTreeSet<String> = (0..n).map(name).collect();
        let union: BTreeSet<String> = live.union(&dead).cloned().collect();
        prop_assert_eq!(union, all);
    }

    /// PROPERTY: More roots never kill a module.
    #[test]
    fn property_adding_roots_is_monotone(
        (n, edges, roots) in graph_input(),
        extra in 0usize..12,
    ) {
        let graph = build(n, &edges);
        let roots: Vec<String> = roots.into_iter().map(name).collect();
        let before = graph.reachable(roots.iter().map(String::as_str));

        let mut more = roots.clone();
        more.push(name(extra % n));
        let after = graph.reachable(more.iter().map(String::as_str));

        prop_assert!(before.is_subset(&after));
    }
}

#[test]
fn chain_with_isolated_module() {
    // A -> B -> C, D isolated
    let mut graph = DependencyGraph::new();
    for module in ["A", "B", "C", "D"] {
        graph.add_module(module);
    }
    assert!(graph.add_dependency("A", "B"));
    assert!(graph.add_dependency("B", "C"));

    let live = graph.reachable(["A"]);
    assert_eq!(live.into_iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(graph.dead(["A"]).into_iter().collect::<Vec<_>>(), vec!["D"]);
    assert_eq!(
        graph.dead(["B"]).into_iter().collect::<Vec<_>>(),
        vec!["A", "D"]
    );
}
