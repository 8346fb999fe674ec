use smallvec::SmallVec;

use crate::core::{LinearScale, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::{DrawingInstructions, GraphStyle};

const PLOT_MARGIN_LEFT_PX: f64 = 72.0;
const PLOT_MARGIN_RIGHT_PX: f64 = 24.0;
const PLOT_MARGIN_BOTTOM_PX: f64 = 64.0;
const TITLE_TOP_PADDING_PX: f64 = 10.0;
const TITLE_LINE_HEIGHT_FACTOR: f64 = 1.3;
const TITLE_GAP_PX: f64 = 28.0;
const TICK_LABEL_GAP_PX: f64 = 4.0;
const AXIS_LINE_WIDTH_PX: f64 = 1.5;
const GRID_LINE_WIDTH_PX: f64 = 1.0;
const LEGEND_INSET_PX: f64 = 10.0;
const LEGEND_PADDING_PX: f64 = 8.0;
const LEGEND_ROW_FACTOR: f64 = 1.6;
/// Rough glyph advance used to size label boxes without a text backend.
const AVERAGE_GLYPH_WIDTH_FACTOR: f64 = 0.6;

fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * AVERAGE_GLYPH_WIDTH_FACTOR
}

impl DrawingInstructions {
    /// Projects the instructions into pixel-space primitives for `viewport`.
    ///
    /// Backends paint rects, then lines, circles and texts, so the plot
    /// background and legend box sit under the grid while labels stay on top.
    pub fn build_render_frame(
        &self,
        viewport: Viewport,
        style: &GraphStyle,
    ) -> PlotResult<RenderFrame> {
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let title_lines: SmallVec<[&str; 4]> = self.title_lines().collect();
        let title_line_height = style.title_font_size_px * TITLE_LINE_HEIGHT_FACTOR;

        let plot_left = PLOT_MARGIN_LEFT_PX;
        let plot_right = width - PLOT_MARGIN_RIGHT_PX;
        let plot_top = TITLE_TOP_PADDING_PX
            + title_line_height * title_lines.len() as f64
            + TITLE_GAP_PX;
        let plot_bottom = height - PLOT_MARGIN_BOTTOM_PX;
        if plot_right <= plot_left || plot_bottom <= plot_top {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let x_range = self.x_axis.display_range();
        let y_range = self.y_axis.display_range();
        let x_scale = LinearScale::new(x_range, plot_left, plot_right)?;
        let y_scale = LinearScale::new(y_range, plot_top, plot_bottom)?.inverted();

        let mut frame = RenderFrame::new(viewport).with_rect(
            RectPrimitive::new(
                plot_left,
                plot_top,
                plot_right - plot_left,
                plot_bottom - plot_top,
                style.background_color,
            )
            .with_border(AXIS_LINE_WIDTH_PX, style.axis_line_color),
        );

        for tick in self.x_axis.ticks.iter().filter(|tick| x_range.contains(tick.value)) {
            let x = x_scale.domain_to_pixel(tick.value);
            frame = frame
                .with_line(
                    LinePrimitive::new(
                        x,
                        plot_top,
                        x,
                        plot_bottom,
                        GRID_LINE_WIDTH_PX,
                        style.grid_line_color,
                    )
                    .with_stroke_style(LineStrokeStyle::Dashed),
                )
                .with_line(LinePrimitive::new(
                    x,
                    plot_bottom,
                    x,
                    plot_bottom + style.tick_mark_length_px,
                    AXIS_LINE_WIDTH_PX,
                    style.axis_line_color,
                ))
                .with_text(TextPrimitive::new(
                    tick.label.clone(),
                    x,
                    plot_bottom + style.tick_mark_length_px + TICK_LABEL_GAP_PX,
                    style.tick_label_font_size_px,
                    style.text_color,
                    TextHAlign::Center,
                ));
        }

        for tick in self.y_axis.ticks.iter().filter(|tick| y_range.contains(tick.value)) {
            let y = y_scale.domain_to_pixel(tick.value);
            frame = frame
                .with_line(
                    LinePrimitive::new(
                        plot_left,
                        y,
                        plot_right,
                        y,
                        GRID_LINE_WIDTH_PX,
                        style.grid_line_color,
                    )
                    .with_stroke_style(LineStrokeStyle::Dashed),
                )
                .with_line(LinePrimitive::new(
                    plot_left - style.tick_mark_length_px,
                    y,
                    plot_left,
                    y,
                    AXIS_LINE_WIDTH_PX,
                    style.axis_line_color,
                ))
                .with_text(TextPrimitive::new(
                    tick.label.clone(),
                    plot_left - style.tick_mark_length_px - TICK_LABEL_GAP_PX,
                    y - style.tick_label_font_size_px / 2.0,
                    style.tick_label_font_size_px,
                    style.text_color,
                    TextHAlign::Right,
                ));
        }

        frame = frame
            .with_text(TextPrimitive::new(
                self.x_axis.title.clone(),
                (plot_left + plot_right) / 2.0,
                plot_bottom
                    + style.tick_mark_length_px
                    + TICK_LABEL_GAP_PX * 2.0
                    + style.tick_label_font_size_px * 1.4,
                style.axis_title_font_size_px,
                style.text_color,
                TextHAlign::Center,
            ))
            .with_text(TextPrimitive::new(
                self.y_axis.title.clone(),
                plot_left,
                plot_top - style.axis_title_font_size_px * 1.4,
                style.axis_title_font_size_px,
                style.text_color,
                TextHAlign::Left,
            ));

        for edge in &self.edges {
            frame = frame.with_line(LinePrimitive::new(
                x_scale.domain_to_pixel(edge.from.x),
                y_scale.domain_to_pixel(edge.from.y),
                x_scale.domain_to_pixel(edge.to.x),
                y_scale.domain_to_pixel(edge.to.y),
                style.edge_width_px,
                style.edge_color,
            ));
        }

        for node in &self.nodes {
            frame = frame.with_circle(CirclePrimitive::new(
                x_scale.domain_to_pixel(node.position.x),
                y_scale.domain_to_pixel(node.position.y),
                style.node_radius_px,
                node.color.with_alpha(style.node_alpha),
            ));
        }

        for edge in &self.edges {
            let x = x_scale.domain_to_pixel(edge.label_position.x);
            let y = y_scale.domain_to_pixel(edge.label_position.y);
            let font = style.edge_label_font_size_px;
            frame = frame.with_text(TextPrimitive::new(
                edge.label.clone(),
                x,
                y - font / 2.0,
                font,
                style.text_color,
                TextHAlign::Center,
            ));
        }

        for node in &self.nodes {
            let font = style.node_label_font_size_px;
            frame = frame.with_text(
                TextPrimitive::new(
                    node.label.clone(),
                    x_scale.domain_to_pixel(node.position.x),
                    y_scale.domain_to_pixel(node.position.y) - font / 2.0,
                    font,
                    style.text_color,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }

        for (index, line) in title_lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            frame = frame.with_text(TextPrimitive::new(
                *line,
                width / 2.0,
                TITLE_TOP_PADDING_PX + title_line_height * index as f64,
                style.title_font_size_px,
                style.text_color,
                TextHAlign::Center,
            ));
        }

        Ok(self.append_legend(frame, style, plot_top, plot_right))
    }

    fn append_legend(
        &self,
        mut frame: RenderFrame,
        style: &GraphStyle,
        plot_top: f64,
        plot_right: f64,
    ) -> RenderFrame {
        if self.legend.is_empty() {
            return frame;
        }

        let font = style.legend_font_size_px;
        let row_height = font * LEGEND_ROW_FACTOR;
        let swatch_radius = font * 0.5;
        let widest_label = self
            .legend
            .iter()
            .map(|entry| estimate_text_width_px(&entry.label, font))
            .fold(0.0, f64::max);
        let box_width = LEGEND_PADDING_PX * 3.0 + swatch_radius * 2.0 + widest_label;
        let box_height = LEGEND_PADDING_PX * 2.0 + row_height * self.legend.len() as f64;
        let box_left = plot_right - LEGEND_INSET_PX - box_width;
        let box_top = plot_top + LEGEND_INSET_PX;

        frame = frame.with_rect(
            RectPrimitive::new(
                box_left,
                box_top,
                box_width,
                box_height,
                style.background_color.with_alpha(0.8),
            )
            .with_border(1.0, Color::rgb(0.8, 0.8, 0.8)),
        );

        for (index, entry) in self.legend.iter().enumerate() {
            let row_center = box_top + LEGEND_PADDING_PX + row_height * (index as f64 + 0.5);
            let swatch_x = box_left + LEGEND_PADDING_PX + swatch_radius;
            frame = frame
                .with_circle(CirclePrimitive::new(
                    swatch_x,
                    row_center,
                    swatch_radius,
                    entry.color,
                ))
                .with_text(TextPrimitive::new(
                    entry.label.clone(),
                    swatch_x + swatch_radius + LEGEND_PADDING_PX,
                    row_center - font / 2.0,
                    font,
                    style.text_color,
                    TextHAlign::Left,
                ));
        }

        frame
    }
}
