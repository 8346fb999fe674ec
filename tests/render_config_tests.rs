use graph_plot::PlotError;
use graph_plot::api::{GraphRenderConfig, GraphRenderer, GraphStyle};
use graph_plot::render::Color;

#[test]
fn empty_json_config_uses_defaults() {
    let config = GraphRenderConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config, GraphRenderConfig::default());
    assert_eq!(config.target_tick_count, 8);
    assert_eq!(config.padding_ratio, 0.1);
}

#[test]
fn partial_style_json_keeps_remaining_defaults() {
    let config = GraphRenderConfig::from_json_str(
        r#"{ "target_tick_count": 5, "style": { "node_radius_px": 20.0 } }"#,
    )
    .expect("partial config");

    assert_eq!(config.target_tick_count, 5);
    assert_eq!(config.style.node_radius_px, 20.0);
    assert_eq!(
        config.style.goal_node_color,
        GraphStyle::default().goal_node_color
    );
}

#[test]
fn malformed_json_config_is_rejected() {
    let err = GraphRenderConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, PlotError::InvalidConfig(_)));
}

#[test]
fn zero_target_tick_count_is_rejected() {
    let err = GraphRenderer::new(GraphRenderConfig::default().with_target_tick_count(0))
        .expect_err("zero ticks");
    assert!(matches!(err, PlotError::InvalidConfig(_)));
}

#[test]
fn negative_or_non_finite_padding_is_rejected() {
    for padding in [-0.1, f64::NAN, f64::INFINITY] {
        let result = GraphRenderer::new(GraphRenderConfig::default().with_padding_ratio(padding));
        assert!(
            matches!(result, Err(PlotError::InvalidConfig(_))),
            "padding {padding} must be rejected"
        );
    }
}

#[test]
fn out_of_range_style_color_is_rejected() {
    let style = GraphStyle {
        regular_node_color: Color::rgb(1.5, 0.0, 0.0),
        ..GraphStyle::default()
    };
    let err = GraphRenderer::new(GraphRenderConfig::default().with_style(style))
        .expect_err("bad color");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn non_positive_style_size_is_rejected() {
    let style = GraphStyle {
        node_radius_px: 0.0,
        ..GraphStyle::default()
    };
    let err = GraphRenderer::new(GraphRenderConfig::default().with_style(style))
        .expect_err("zero radius");
    assert!(err.to_string().contains("node_radius_px"));
}
