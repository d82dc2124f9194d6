//! User-vs-site comparison chart: one band per top category, a thin
//! colored bar for the user's share over a thick neutral bar for the
//! site-wide share, both on a shared linear axis.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use sefstats_core::charts::{bar_layout, caption_fits_after_bar, BarLayout};
use sefstats_core::models::CategoryCounts;

use crate::ui::i18n::{tr, InterfaceLang};
use crate::ui::theme;

pub fn render_category_bars(
    f: &mut Frame,
    area: Rect,
    user_cats: &CategoryCounts,
    site_cats: &CategoryCounts,
    lang: InterfaceLang,
) {
    let layout = bar_layout(user_cats, site_cats);
    if layout.rows.is_empty() {
        let notice = Paragraph::new(tr(lang, "No reading data")).style(theme::text_dim());
        f.render_widget(notice, area);
        return;
    }

    let chart_width = area.width.saturating_sub(1) as usize;
    let caption = tr(lang, "Average Sefaria User");

    let mut lines: Vec<Line> = Vec::with_capacity(layout.rows.len() * 4);
    for (band, row) in layout.rows.iter().enumerate() {
        let color = theme::category_color(&row.category);

        lines.push(Line::styled(row.category.to_uppercase(), theme::text_primary()));

        let user_width = bar_width(row.user_fraction, layout.axis_max, chart_width);
        lines.push(Line::styled(
            "\u{2584}".repeat(user_width),
            Style::default().fg(color),
        ));

        let site_width = bar_width(row.site_fraction, layout.axis_max, chart_width);
        if band == 0 {
            lines.push(site_bar_with_caption(site_width, row.site_fraction, &layout, caption));
        } else {
            lines.push(Line::from(site_bar_span(site_width)));
        }

        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn bar_width(fraction: f64, axis_max: f64, chart_width: usize) -> usize {
    if axis_max <= 0.0 {
        return 0;
    }
    ((fraction / axis_max) * chart_width as f64).round() as usize
}

fn site_bar_span(width: usize) -> Span<'static> {
    Span::styled(" ".repeat(width), Style::default().bg(theme::BAR_SITE))
}

/// The top band's site bar carries the "Average Sefaria User" caption:
/// after the bar end when the end sits in the left part of the axis,
/// right-aligned inside the bar otherwise.
fn site_bar_with_caption(
    site_width: usize,
    site_fraction: f64,
    layout: &BarLayout,
    caption: &str,
) -> Line<'static> {
    let caption_width = caption.width();
    if caption_fits_after_bar(site_fraction, layout.axis_max) || site_width < caption_width + 2 {
        Line::from(vec![
            site_bar_span(site_width),
            Span::raw("  "),
            Span::styled(caption.to_string(), Style::default().fg(theme::BAR_CAPTION)),
        ])
    } else {
        let kept = site_width - caption_width - 2;
        Line::from(vec![
            site_bar_span(kept),
            Span::styled(
                format!(" {caption} "),
                Style::default().fg(theme::BG_APP).bg(theme::BAR_SITE),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_scaling() {
        assert_eq!(bar_width(0.5, 1.0, 60), 30);
        assert_eq!(bar_width(0.0, 1.0, 60), 0);
        assert_eq!(bar_width(1.0, 1.0, 60), 60);
        // Degenerate axis never divides by zero.
        assert_eq!(bar_width(0.5, 0.0, 60), 0);
    }

    #[test]
    fn test_caption_moves_inside_long_bar() {
        let layout = BarLayout {
            rows: Vec::new(),
            axis_max: 0.5,
        };
        // Short bar: caption trails after the bar.
        let line = site_bar_with_caption(10, 0.10, &layout, "Average Sefaria User");
        assert_eq!(line.spans.len(), 3);

        // Long bar: caption embeds in the bar, total width stays the bar's.
        let line = site_bar_with_caption(50, 0.45, &layout, "Average Sefaria User");
        assert_eq!(line.spans.len(), 2);
        let total: usize = line.spans.iter().map(|s| s.content.width()).sum();
        assert_eq!(total, 50);
    }
}
