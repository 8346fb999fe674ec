use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Visual style applied when drawing a graph.
///
/// Node colors are part of the drawing instructions; the pixel sizes are
/// only consumed when projecting instructions into a render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphStyle {
    pub start_node_color: Color,
    pub goal_node_color: Color,
    pub regular_node_color: Color,
    pub node_alpha: f64,
    pub node_radius_px: f64,
    pub edge_color: Color,
    pub edge_width_px: f64,
    pub grid_line_color: Color,
    pub axis_line_color: Color,
    pub text_color: Color,
    pub background_color: Color,
    pub title_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub tick_label_font_size_px: f64,
    pub node_label_font_size_px: f64,
    pub edge_label_font_size_px: f64,
    pub legend_font_size_px: f64,
    pub tick_mark_length_px: f64,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            start_node_color: Color::rgb8(0, 128, 0),
            goal_node_color: Color::rgb8(255, 0, 0),
            regular_node_color: Color::rgb8(173, 216, 230),
            node_alpha: 0.8,
            node_radius_px: 12.6,
            edge_color: Color::BLACK,
            edge_width_px: 1.0,
            grid_line_color: Color::rgba(0.69, 0.69, 0.69, 0.7),
            axis_line_color: Color::BLACK,
            text_color: Color::BLACK,
            background_color: Color::WHITE,
            title_font_size_px: 16.0,
            axis_title_font_size_px: 13.0,
            tick_label_font_size_px: 13.0,
            node_label_font_size_px: 13.0,
            edge_label_font_size_px: 10.5,
            legend_font_size_px: 13.0,
            tick_mark_length_px: 6.0,
        }
    }
}

impl GraphStyle {
    pub fn validate(&self) -> PlotResult<()> {
        for color in [
            self.start_node_color,
            self.goal_node_color,
            self.regular_node_color,
            self.edge_color,
            self.grid_line_color,
            self.axis_line_color,
            self.text_color,
            self.background_color,
        ] {
            color.validate()?;
        }

        if !self.node_alpha.is_finite() || !(0.0..=1.0).contains(&self.node_alpha) {
            return Err(PlotError::InvalidConfig(
                "node alpha must be finite and in [0, 1]".to_owned(),
            ));
        }

        for (name, value) in [
            ("node_radius_px", self.node_radius_px),
            ("edge_width_px", self.edge_width_px),
            ("title_font_size_px", self.title_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
            ("tick_label_font_size_px", self.tick_label_font_size_px),
            ("node_label_font_size_px", self.node_label_font_size_px),
            ("edge_label_font_size_px", self.edge_label_font_size_px),
            ("legend_font_size_px", self.legend_font_size_px),
            ("tick_mark_length_px", self.tick_mark_length_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        Ok(())
    }
}
