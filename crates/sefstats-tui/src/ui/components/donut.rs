//! Category donut: a braille-canvas ring with per-category arcs, white
//! separators, centered arc labels, and a legend carrying the precise
//! per-slice percentages (the hover tooltip of the web dashboard).

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use sefstats_core::charts::{pie_arcs, PieArc, MIN_LABEL_SPAN};
use sefstats_core::models::CategoryCounts;

use crate::ui::format::format_percent;
use crate::ui::i18n::{tr, InterfaceLang};
use crate::ui::layout::{
    DONUT_CANVAS_BOUND, DONUT_INNER_RADIUS, DONUT_LABEL_RADIUS, DONUT_LEGEND_WIDTH,
    DONUT_OUTER_RADIUS,
};
use crate::ui::theme;

/// Angular sampling step when rasterizing arcs, dense enough for braille
/// resolution at the sizes this dashboard uses.
const ANGLE_STEP: f64 = 0.015;

/// Radial sampling step between the inner and outer radius.
const RADIUS_STEP: f64 = 0.02;

pub fn render_donut(
    f: &mut Frame,
    area: Rect,
    caption: &str,
    cats: &CategoryCounts,
    lang: InterfaceLang,
) {
    if area.height < 4 || area.width < 12 {
        return;
    }

    let [chart_area, caption_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let arcs = pie_arcs(cats);
    if arcs.is_empty() {
        let notice = Paragraph::new(tr(lang, "No reading data"))
            .style(theme::text_dim())
            .alignment(Alignment::Center);
        f.render_widget(notice, chart_area);
        render_caption(f, caption_area, caption);
        return;
    }

    let legend_width = DONUT_LEGEND_WIDTH.min(chart_area.width / 2);
    let [ring_area, legend_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(legend_width)])
            .areas(chart_area);

    render_ring(f, ring_area, &arcs);
    render_legend(f, legend_area, &arcs);
    render_caption(f, caption_area, caption);
}

fn render_caption(f: &mut Frame, area: Rect, caption: &str) {
    let caption = Paragraph::new(caption)
        .style(theme::text_muted())
        .alignment(Alignment::Center);
    f.render_widget(caption, area);
}

fn render_ring(f: &mut Frame, area: Rect, arcs: &[PieArc]) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Braille cells are 2x4 dots; widen the x bounds so one unit spans the
    // same number of dots on both axes and the ring stays circular.
    let y_bound = DONUT_CANVAS_BOUND;
    let x_bound = y_bound * f64::from(area.width) / (2.0 * f64::from(area.height));

    // One text row/column in canvas units, for centering printed labels.
    let cell_w = 2.0 * x_bound / f64::from(area.width);
    let cell_h = 2.0 * y_bound / f64::from(area.height);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_bound, x_bound])
        .y_bounds([-y_bound, y_bound])
        .paint(|ctx| {
            for arc in arcs {
                draw_arc(ctx, arc);
            }
            if arcs.len() > 1 {
                for arc in arcs {
                    draw_separator(ctx, arc.start_angle);
                }
            }
            ctx.layer();
            for arc in arcs {
                draw_labels(ctx, arc, cell_w, cell_h);
            }
        });
    f.render_widget(canvas, area);
}

/// Fill one arc of the ring with its category color. Zero-span arcs (the
/// empty "Etc" bucket) draw nothing.
fn draw_arc(ctx: &mut Context<'_>, arc: &PieArc) {
    let span = arc.span();
    if span <= f64::EPSILON {
        return;
    }

    let steps = (span / ANGLE_STEP).ceil() as usize;
    let mut coords = Vec::with_capacity(steps * 14);
    for i in 0..=steps {
        let angle = arc.start_angle + span * i as f64 / steps as f64;
        let mut radius = DONUT_INNER_RADIUS;
        while radius <= DONUT_OUTER_RADIUS {
            coords.push(point_at(angle, radius));
            radius += RADIUS_STEP;
        }
    }

    ctx.draw(&Points {
        coords: &coords,
        color: theme::category_color(&arc.slice.name),
    });
}

fn draw_separator(ctx: &mut Context<'_>, angle: f64) {
    let (x1, y1) = point_at(angle, DONUT_INNER_RADIUS);
    let (x2, y2) = point_at(angle, DONUT_OUTER_RADIUS);
    ctx.draw(&CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color: theme::ARC_SEPARATOR,
    });
}

/// Category name at the arc centroid; percentage line underneath only when
/// the arc is wide enough to carry it.
fn draw_labels(ctx: &mut Context<'_>, arc: &PieArc, cell_w: f64, cell_h: f64) {
    if arc.span() <= f64::EPSILON {
        return;
    }

    let (x, y) = point_at(arc.mid_angle(), DONUT_LABEL_RADIUS);
    let name = arc.slice.name.clone();
    let name_x = x - cell_w * name.width() as f64 / 2.0;
    ctx.print(name_x, y, Line::styled(name, theme::text_primary()));

    if arc.span() > MIN_LABEL_SPAN {
        let percent = format_percent(arc.fraction, 1);
        let percent_x = x - cell_w * percent.width() as f64 / 2.0;
        ctx.print(percent_x, y - cell_h, Line::styled(percent, theme::text_muted()));
    }
}

fn render_legend(f: &mut Frame, area: Rect, arcs: &[PieArc]) {
    let lines: Vec<Line> = arcs
        .iter()
        .map(|arc| {
            Line::from(vec![
                Span::styled(
                    "\u{25cf} ",
                    Style::default().fg(theme::category_color(&arc.slice.name)),
                ),
                Span::styled(
                    format!("{}: {}", arc.slice.name, format_percent(arc.fraction, 2)),
                    theme::text_muted(),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

/// Point on the ring for an angle measured clockwise from 12 o'clock.
fn point_at(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.sin(), radius * angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_cardinal_angles() {
        let (x, y) = point_at(0.0, 1.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);

        // Quarter turn clockwise lands at 3 o'clock.
        let (x, y) = point_at(std::f64::consts::FRAC_PI_2, 1.0);
        assert!((x - 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }
}
