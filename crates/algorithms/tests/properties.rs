//! Property-based tests for the step-instrumented algorithms.
//!
//! Each algorithm is checked against a brute-force or standard-library
//! reference over randomized inputs, along with the event-count and
//! monotonicity guarantees observers rely on.

use proptest::{
    collection::vec,
    prelude::{Strategy, prop_assert, prop_assert_eq},
    proptest,
    test_runner::Config as ProptestConfig,
};

use algoviz_algorithms::{
    dynamic::knapsack,
    graph::{Distance, WeightedGraph, dijkstra},
    searching::binary,
    sorting::bubble,
};

const NODE_NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn edges_strategy() -> impl Strategy<Value = Vec<(usize, usize, u64)>> {
    vec((0..NODE_NAMES.len(), 0..NODE_NAMES.len(), 0_u64..20), 0..15)
}

fn build_graph(edges: &[(usize, usize, u64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for name in NODE_NAMES {
        graph.add_node(name);
    }
    for &(from, to, weight) in edges {
        graph.add_edge(NODE_NAMES[from], NODE_NAMES[to], weight);
    }
    graph
}

/// Bellman-Ford style reference: relax every edge `V - 1` times.
fn reference_distances(edges: &[(usize, usize, u64)], start: usize) -> Vec<Option<u64>> {
    let mut distances = vec![None; NODE_NAMES.len()];
    distances[start] = Some(0);
    for _ in 1..NODE_NAMES.len() {
        for &(from, to, weight) in edges {
            if let Some(base) = distances[from] {
                let candidate = base + weight;
                if distances[to].is_none_or(|current| candidate < current) {
                    distances[to] = Some(candidate);
                }
            }
        }
    }
    distances
}

/// Tries every subset of items.
fn brute_force_knapsack(weights: &[usize], values: &[u64], capacity: usize) -> u64 {
    (0_u32..1 << weights.len())
        .filter_map(|mask| {
            let (weight, value) = (0..weights.len())
                .filter(|item| mask & (1 << item) != 0)
                .fold((0, 0), |(w, v), item| (w + weights[item], v + values[item]));
            (weight <= capacity).then_some(value)
        })
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bubble_sort_matches_std_sort(mut values in vec(-50_i64..50, 0..25)) {
        let mut expected = values.clone();
        expected.sort_unstable();

        let solution = bubble::sort_unobserved(&mut values);

        prop_assert_eq!(values, expected);
        prop_assert_eq!(solution.status, bubble::Status::Complete);
    }

    #[test]
    fn bubble_sort_emits_every_pair(mut values in vec(-50_i64..50, 0..25)) {
        let n = values.len();
        let mut events = 0;

        bubble::sort(&mut values, |_: &bubble::Event<'_, i64>| {
            events += 1;
            None
        });

        prop_assert_eq!(events, n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn binary_search_finds_present_targets(
        mut values in vec(-100_i64..100, 1..40),
        pick in 0_usize..40,
    ) {
        values.sort_unstable();
        let target = values[pick % values.len()];

        let solution = binary::search_unobserved(&values, &target);

        let index = solution.index.expect("target is present");
        prop_assert_eq!(values[index], target);
    }

    #[test]
    fn binary_search_reports_absent_targets(
        values in vec(-100_i64..100, 0..40),
        target in -100_i64..100,
    ) {
        let mut values: Vec<i64> = values.into_iter().filter(|v| *v != target).collect();
        values.sort_unstable();

        let solution = binary::search_unobserved(&values, &target);

        prop_assert_eq!(solution.index, None);
        prop_assert_eq!(solution.position(), -1);
    }

    #[test]
    fn binary_search_step_bound(
        mut values in vec(-100_i64..100, 1..200),
        target in -120_i64..120,
    ) {
        values.sort_unstable();
        let n = values.len();
        let bound = n.next_power_of_two().trailing_zeros() as usize + 1;
        let mut events = 0;

        binary::search(&values, &target, |_: &binary::Event<'_, i64>| {
            events += 1;
            None
        });

        prop_assert!(events <= bound, "{events} probes for n = {n}");
    }

    #[test]
    fn dijkstra_matches_reference(edges in edges_strategy(), start in 0..NODE_NAMES.len()) {
        let graph = build_graph(&edges);
        let expected = reference_distances(&edges, start);

        let solution = dijkstra::solve_unobserved(&graph, NODE_NAMES[start]);

        for (node, expected) in NODE_NAMES.iter().zip(expected) {
            let actual = solution.distances.get(node).and_then(Distance::finite);
            prop_assert_eq!(actual, expected, "distance to {}", node);
        }
    }

    #[test]
    fn dijkstra_finalized_distances_never_change(
        edges in edges_strategy(),
        start in 0..NODE_NAMES.len(),
    ) {
        let graph = build_graph(&edges);
        let mut events: Vec<dijkstra::Event> = Vec::new();

        let solution = dijkstra::solve(&graph, NODE_NAMES[start], |event: &dijkstra::Event| {
            events.push(event.clone());
            None
        });

        for (i, event) in events.iter().enumerate() {
            let finalized = event.current_distance();
            for later in &events[i..] {
                prop_assert_eq!(later.distances.get(&event.current), Some(finalized));
            }
            prop_assert_eq!(solution.distances.get(&event.current), Some(finalized));
        }
    }

    #[test]
    fn knapsack_matches_brute_force(
        items in vec((1_usize..8, 0_u64..20), 0..8),
        capacity in 0_usize..20,
    ) {
        let (weights, values): (Vec<usize>, Vec<u64>) = items.into_iter().unzip();

        let solution = knapsack::solve_unobserved(&weights, &values, capacity);

        prop_assert_eq!(solution.best_value, brute_force_knapsack(&weights, &values, capacity));

        let chosen_weight: usize = solution.selected.iter().map(|&item| weights[item]).sum();
        let chosen_value: u64 = solution.selected.iter().map(|&item| values[item]).sum();
        prop_assert!(chosen_weight <= capacity);
        prop_assert_eq!(chosen_value, solution.best_value);
    }

    #[test]
    fn knapsack_rows_are_non_decreasing(
        items in vec((1_usize..8, 0_u64..20), 0..8),
        capacity in 0_usize..20,
    ) {
        let (weights, values): (Vec<usize>, Vec<u64>) = items.into_iter().unzip();

        let solution = knapsack::solve_unobserved(&weights, &values, capacity);

        for row in solution.table.rows() {
            prop_assert!(row.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn observed_and_silent_knapsack_agree(
        items in vec((1_usize..5, 0_u64..10), 0..5),
        capacity in 0_usize..8,
    ) {
        let (weights, values): (Vec<usize>, Vec<u64>) = items.into_iter().unzip();
        let mut events = 0;

        let observed = knapsack::solve(&weights, &values, capacity, |_: &knapsack::Event| {
            events += 1;
            None
        });
        let silent = knapsack::solve_unobserved(&weights, &values, capacity);

        prop_assert_eq!(events, weights.len() * (capacity + 1));
        prop_assert_eq!(observed, silent);
    }
}

#[test]
fn sorts_concrete_scenario() {
    let mut values = vec![5, 2, 8, 1, 9];
    bubble::sort_unobserved(&mut values);
    assert_eq!(values, [1, 2, 5, 8, 9]);
}

#[test]
fn searches_concrete_scenario() {
    assert_eq!(binary::search_unobserved(&[1, 2, 5, 8, 9], &8).index, Some(3));
}

#[test]
fn shortest_paths_concrete_scenario() {
    let graph: WeightedGraph = "A:B,4;C,2 B:C,1;D,5 C:D,3".parse().expect("valid graph");

    let solution = dijkstra::solve_unobserved(&graph, "A");

    let distances: Vec<(String, Distance)> = solution
        .distances
        .iter()
        .map(|(node, distance)| (node.to_owned(), distance))
        .collect();
    assert_eq!(
        distances,
        [
            ("A".to_owned(), Distance::Finite(0)),
            ("B".to_owned(), Distance::Finite(4)),
            ("C".to_owned(), Distance::Finite(2)),
            ("D".to_owned(), Distance::Finite(5)),
        ]
    );
}

#[test]
fn shortest_paths_with_return_edge() {
    // With an edge back from C to B, B is reached through C for 3.
    let graph: WeightedGraph = "A:B,4;C,2 B:C,1;D,5 C:D,3;B,1".parse().expect("valid graph");

    let solution = dijkstra::solve_unobserved(&graph, "A");

    assert_eq!(solution.distances.get("B"), Some(Distance::Finite(3)));
    assert_eq!(solution.distances.get("D"), Some(Distance::Finite(5)));
}

#[test]
fn knapsack_concrete_scenario() {
    assert_eq!(
        knapsack::solve_unobserved(&[1, 3, 4, 5], &[1, 4, 5, 7], 7).best_value,
        9
    );
}
