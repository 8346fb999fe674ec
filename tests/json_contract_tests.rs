use graph_plot::PlotError;
use graph_plot::api::{DRAWING_INSTRUCTIONS_JSON_SCHEMA_V1, DrawingInstructions, render};
use graph_plot::core::parse;

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

fn reference_drawing() -> DrawingInstructions {
    render(&parse(TEST_GRAPH).expect("valid graph"), "test.txt")
}

#[test]
fn contract_v1_carries_schema_version_and_instructions() {
    let json = reference_drawing()
        .to_json_contract_v1_pretty()
        .expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json value");

    assert_eq!(
        value["schema_version"],
        serde_json::json!(DRAWING_INSTRUCTIONS_JSON_SCHEMA_V1)
    );
    assert_eq!(value["instructions"]["nodes"][0]["role"], "Start");
    assert_eq!(value["instructions"]["edges"][1]["label"], "3.0");
    assert_eq!(value["instructions"]["x_axis"]["label_format"], "OneDecimal");
}

#[test]
fn compat_reader_accepts_contract_and_bare_payloads() {
    let drawing = reference_drawing();

    let from_contract = DrawingInstructions::from_json_compat_str(
        &drawing.to_json_contract_v1_pretty().expect("contract"),
    )
    .expect("parse contract");
    let from_bare =
        DrawingInstructions::from_json_compat_str(&drawing.to_json_pretty().expect("bare"))
            .expect("parse bare");

    for parsed in [&from_contract, &from_bare] {
        assert_eq!(parsed.title, drawing.title);
        assert_eq!(parsed.nodes.len(), drawing.nodes.len());
        assert_eq!(parsed.edges.len(), drawing.edges.len());
        assert_eq!(parsed.x_axis.ticks, drawing.x_axis.ticks);
        assert_eq!(parsed.legend.len(), 3);
    }
}

#[test]
fn unknown_schema_version_is_rejected() {
    let json = reference_drawing()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replacen("\"schema_version\": 1", "\"schema_version\": 2", 1);

    let err = DrawingInstructions::from_json_compat_str(&json).expect_err("future schema");
    match err {
        PlotError::InvalidData(message) => assert!(message.contains("schema version: 2")),
        other => panic!("unexpected error: {other}"),
    }
}
