use graph_plot::PlotError;
use graph_plot::core::{GraphEdge, NodePosition, parse, parse_lines};

const TEST_GRAPH: &str = "TestGraph
3
0.0 0.0
10.0 0.0
5.0 8.0
0 2
2
0 1 4.0
1 2 3.0
";

fn format_error_line(err: PlotError) -> usize {
    match err {
        PlotError::Format { line, .. } => line,
        other => panic!("expected format error, got: {other}"),
    }
}

#[test]
fn parses_reference_graph() {
    let graph = parse(TEST_GRAPH).expect("valid graph");

    assert_eq!(graph.name(), "TestGraph");
    assert_eq!(graph.num_nodes(), 3);
    assert_eq!(
        graph.coordinates(),
        &[
            NodePosition::new(0.0, 0.0),
            NodePosition::new(10.0, 0.0),
            NodePosition::new(5.0, 8.0),
        ]
    );
    assert_eq!(graph.start_node(), 0);
    assert_eq!(graph.goal_node(), 2);
    assert_eq!(
        graph.edges(),
        &[GraphEdge::new(0, 1, 4.0), GraphEdge::new(1, 2, 3.0)]
    );
}

#[test]
fn name_is_trimmed_but_otherwise_verbatim() {
    let graph = parse("  City  Grid #4 \t\n1\n2 3\n0 0\n0\n").expect("valid graph");
    assert_eq!(graph.name(), "City  Grid #4");
}

#[test]
fn crlf_line_endings_are_accepted() {
    let text = TEST_GRAPH.replace('\n', "\r\n");
    let graph = parse(&text).expect("crlf graph");
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn parse_lines_matches_parse() {
    let lines: Vec<String> = TEST_GRAPH.lines().map(str::to_owned).collect();
    assert_eq!(
        parse_lines(&lines).expect("from lines"),
        parse(TEST_GRAPH).expect("from text")
    );
}

#[test]
fn lines_after_declared_edges_are_ignored() {
    let text = format!("{TEST_GRAPH}0 1 9.0\nnot even numbers\n");
    let graph = parse(&text).expect("trailing content");
    assert_eq!(graph.edges().len(), 2);
}

#[test]
fn zero_edges_is_valid() {
    let graph = parse("Solo\n1\n4.5 -2.0\n0 0\n0").expect("single node");
    assert_eq!(graph.num_nodes(), 1);
    assert!(graph.edges().is_empty());
    assert_eq!(graph.start_node(), graph.goal_node());
}

#[test]
fn real_numbers_accept_fraction_and_exponent_forms() {
    let graph = parse("G\n2\n-1.25 3\n1e2 .5\n0 1\n1\n0 1 2.5e-1\n").expect("valid graph");
    assert_eq!(graph.coordinates()[0], NodePosition::new(-1.25, 3.0));
    assert_eq!(graph.coordinates()[1], NodePosition::new(100.0, 0.5));
    assert_eq!(graph.edges()[0].weight, 0.25);
}

#[test]
fn integral_real_edge_endpoints_are_accepted() {
    let graph = parse("G\n2\n0 0\n1 1\n0 1\n1\n1.0 0.0 7\n").expect("valid graph");
    assert_eq!(graph.edges(), &[GraphEdge::new(1, 0, 7.0)]);
}

#[test]
fn truncated_input_reports_missing_line() {
    let err = parse("G\n2\n0 0").expect_err("missing coordinate line");
    match err {
        PlotError::Format { line, message } => {
            assert_eq!(line, 4);
            assert!(message.contains("unexpected end of input"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_edge_lines_fail() {
    let err = parse("G\n2\n0 0\n1 1\n0 1\n3\n0 1 1.0\n").expect_err("edges short");
    assert_eq!(format_error_line(err), 8);
}

#[test]
fn blank_lines_are_not_skipped() {
    let err = parse("G\n\n1\n0 0\n0 0\n0\n").expect_err("blank count line");
    assert_eq!(format_error_line(err), 2);
}

#[test]
fn empty_name_is_rejected() {
    let err = parse("   \n1\n0 0\n0 0\n0\n").expect_err("empty name");
    assert_eq!(format_error_line(err), 1);
}

#[test]
fn non_numeric_coordinate_is_rejected() {
    let err = parse("G\n1\n0 abc\n0 0\n0\n").expect_err("bad coordinate");
    assert_eq!(format_error_line(err), 3);
}

#[test]
fn non_finite_coordinate_is_rejected() {
    let err = parse("G\n1\nnan 0\n0 0\n0\n").expect_err("nan coordinate");
    assert_eq!(format_error_line(err), 3);
}

#[test]
fn wrong_token_count_is_rejected() {
    let coordinate = parse("G\n1\n0 0 0\n0 0\n0\n").expect_err("three coordinates");
    assert_eq!(format_error_line(coordinate), 3);

    let start_goal = parse("G\n1\n0 0\n0\n0\n").expect_err("single start token");
    assert_eq!(format_error_line(start_goal), 4);

    let edge = parse("G\n2\n0 0\n1 1\n0 1\n1\n0 1\n").expect_err("edge without weight");
    assert_eq!(format_error_line(edge), 7);
}

#[test]
fn zero_node_count_is_rejected() {
    let err = parse("G\n0\n0 0\n0\n").expect_err("no nodes");
    assert_eq!(format_error_line(err), 2);
}

#[test]
fn negative_or_fractional_counts_are_rejected() {
    assert_eq!(format_error_line(parse("G\n-1\n").expect_err("negative")), 2);
    assert_eq!(format_error_line(parse("G\n1.5\n").expect_err("fraction")), 2);
}

#[test]
fn out_of_range_goal_fails_fast() {
    let err = parse("G\n2\n0 0\n1 1\n0 2\n0\n").expect_err("goal out of range");
    match err {
        PlotError::NodeIndexOutOfRange {
            field,
            index,
            num_nodes,
        } => {
            assert_eq!(field, "goal_node");
            assert_eq!(index, 2);
            assert_eq!(num_nodes, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn out_of_range_edge_endpoint_fails_fast() {
    let err = parse("G\n2\n0 0\n1 1\n0 1\n2\n0 1 1.0\n1 5 2.0\n").expect_err("edge out of range");
    assert!(matches!(
        err,
        PlotError::NodeIndexOutOfRange { index: 5, .. }
    ));
    assert!(err.to_string().contains("edge 1 target"));
}

#[test]
fn negative_start_node_fails_fast() {
    let err = parse("G\n2\n0 0\n1 1\n-1 1\n0\n").expect_err("negative start");
    assert!(matches!(
        err,
        PlotError::NodeIndexOutOfRange { index: -1, .. }
    ));
}

#[test]
fn huge_declared_node_count_with_short_body_is_a_format_error() {
    let err = parse("G\n99999999999999999\n0 0\n").expect_err("nodes short");
    assert_eq!(format_error_line(err), 4);
}

#[test]
fn huge_declared_edge_count_with_short_body_is_a_format_error() {
    let err = parse("G\n1\n0 0\n0 0\n1000000000000000000\n").expect_err("edges short");
    assert_eq!(format_error_line(err), 6);
}

#[test]
fn start_and_goal_reject_real_tokens() {
    let start = parse("G\n2\n0 0\n1 1\n0.0 1\n0\n").expect_err("real start");
    assert_eq!(format_error_line(start), 5);

    let goal = parse("G\n2\n0 0\n1 1\n0 1.0\n0\n").expect_err("real goal");
    assert_eq!(format_error_line(goal), 5);
}

#[test]
fn coordinate_span_beyond_f64_range_is_rejected() {
    let err = parse("G\n2\n-1e308 0\n1e308 0\n0 1\n0\n").expect_err("x span overflows");
    match err {
        PlotError::InvalidData(message) => {
            assert!(message.starts_with("x coordinate span"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = parse("G\n2\n0 -1e308\n0 1e308\n0 1\n0\n").expect_err("y span overflows");
    match err {
        PlotError::InvalidData(message) => {
            assert!(message.starts_with("y coordinate span"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
