use std::collections::HashSet;
use std::fmt::Write as _;

use graph_plot::api::{GraphStyle, NodeRole, render};
use graph_plot::core::{Viewport, parse};
use proptest::prelude::*;

type EdgeSpec = (usize, usize, f64);
type GraphCase = (Vec<(f64, f64)>, usize, usize, Vec<EdgeSpec>);

fn graph_text(
    coordinates: &[(f64, f64)],
    start: usize,
    goal: usize,
    edges: &[EdgeSpec],
) -> String {
    let mut text = format!("Generated\n{}\n", coordinates.len());
    for (x, y) in coordinates {
        writeln!(text, "{x} {y}").expect("write to string");
    }
    writeln!(text, "{start} {goal}").expect("write to string");
    writeln!(text, "{}", edges.len()).expect("write to string");
    for (u, v, w) in edges {
        writeln!(text, "{u} {v} {w}").expect("write to string");
    }
    text
}

fn graph_case() -> impl Strategy<Value = GraphCase> {
    (1usize..24).prop_flat_map(|num_nodes| {
        (
            prop::collection::vec((-5_000.0f64..5_000.0, -5_000.0f64..5_000.0), num_nodes),
            0..num_nodes,
            0..num_nodes,
            prop::collection::vec((0..num_nodes, 0..num_nodes, 0.0f64..1_000.0), 0..40),
        )
    })
}

proptest! {
    #[test]
    fn parsed_counts_match_declared_counts(
        (coordinates, start, goal, edges) in graph_case()
    ) {
        let graph = parse(&graph_text(&coordinates, start, goal, &edges)).expect("valid graph");

        prop_assert_eq!(graph.num_nodes(), coordinates.len());
        prop_assert_eq!(graph.coordinates().len(), graph.num_nodes());
        prop_assert_eq!(graph.edges().len(), edges.len());
        prop_assert_eq!(graph.start_node(), start);
        prop_assert_eq!(graph.goal_node(), goal);
        for (parsed, (x, y)) in graph.coordinates().iter().zip(&coordinates) {
            prop_assert_eq!(parsed.x, *x);
            prop_assert_eq!(parsed.y, *y);
        }
    }

    #[test]
    fn rendered_edges_are_unique_unordered_pairs(
        (coordinates, start, goal, edges) in graph_case()
    ) {
        let graph = parse(&graph_text(&coordinates, start, goal, &edges)).expect("valid graph");
        let drawing = render(&graph, "generated.txt");

        let declared: HashSet<(usize, usize)> =
            graph.edges().iter().map(|edge| edge.unordered_key()).collect();
        let drawn: Vec<(usize, usize)> = drawing
            .edges
            .iter()
            .map(|edge| (edge.u.min(edge.v), edge.u.max(edge.v)))
            .collect();
        let drawn_set: HashSet<(usize, usize)> = drawn.iter().copied().collect();

        prop_assert_eq!(drawn.len(), drawn_set.len());
        prop_assert_eq!(drawn_set, declared);
    }

    #[test]
    fn every_graph_has_exactly_one_goal_and_projects_to_finite_frame(
        (coordinates, start, goal, edges) in graph_case()
    ) {
        let graph = parse(&graph_text(&coordinates, start, goal, &edges)).expect("valid graph");
        let drawing = render(&graph, "generated.txt");

        let goals = drawing.nodes.iter().filter(|node| node.role == NodeRole::Goal).count();
        let starts = drawing.nodes.iter().filter(|node| node.role == NodeRole::Start).count();
        prop_assert_eq!(goals, 1);
        prop_assert_eq!(starts, usize::from(start != goal));

        let frame = drawing
            .build_render_frame(Viewport::default(), &GraphStyle::default())
            .expect("build frame");
        prop_assert!(frame.validate().is_ok());
    }
}
