//! The dashboard view: mode chooser, stat cards, the donut pair, the
//! comparison chart, and the favorites lists, stacked top to bottom.
//! Sections render in order and clip when the terminal is short.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use sefstats_core::charts::TOP_CATEGORY_COUNT;
use sefstats_core::models::{RefLink, SheetListing};

use crate::ui::components::{
    render_category_bars, render_donut, render_mode_chooser, render_stat_cards, StatCard,
};
use crate::ui::format::{format_count, spinner_frame, truncate_with_ellipsis};
use crate::ui::i18n::{tr, InterfaceLang};
use crate::ui::layout;
use crate::ui::theme;
use crate::ui::{App, InputMode};

pub fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let area = pad_horizontal(area, layout::CONTENT_PADDING_H);

    let chrome_height = if app.moderator {
        layout::UID_INPUT_HEIGHT + layout::MODE_CHOOSER_HEIGHT
    } else {
        layout::MODE_CHOOSER_HEIGHT
    };
    let [chrome_area, body_area] =
        Layout::vertical([Constraint::Length(chrome_height), Constraint::Min(0)]).areas(area);

    let mode_area = if app.moderator {
        let [uid_area, mode_area] = Layout::vertical([
            Constraint::Length(layout::UID_INPUT_HEIGHT),
            Constraint::Length(layout::MODE_CHOOSER_HEIGHT),
        ])
        .areas(chrome_area);
        render_uid_input(f, app, uid_area);
        mode_area
    } else {
        chrome_area
    };
    render_mode_chooser(f, mode_area, app.mode, app.lang);

    if app.is_ready() {
        render_body(f, app, body_area);
    } else {
        render_pending(f, app, body_area);
    }
}

/// Moderator-only user-id field; ordinary users always see their own stats.
fn render_uid_input(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let shown = if app.uid_input.is_empty() && !editing {
        app.requested_uid().to_string()
    } else {
        app.uid_input.clone()
    };

    let mut spans = vec![
        Span::styled(format!("{}: ", tr(app.lang, "User ID")), theme::text_muted()),
        Span::styled(
            shown,
            if editing {
                theme::input_active()
            } else {
                theme::text_dim()
            },
        ),
    ];
    if editing {
        spans.push(Span::styled("\u{2588}", theme::text_dim()));
    } else {
        spans.push(Span::styled("  (u to edit)", theme::text_dim()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Spinner until both fetches resolve; explicit error lines with a retry
/// hint when one of them failed.
fn render_pending(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = app.site.error() {
        lines.push(Line::styled(
            format!("Site stats failed: {error}"),
            theme::status_error(),
        ));
    }
    if let Some(error) = app.user.error() {
        lines.push(Line::styled(
            format!("User stats failed: {error}"),
            theme::status_error(),
        ));
    }

    if lines.is_empty() {
        lines.push(Line::styled(
            format!("{} Loading...", spinner_frame(app.frame())),
            theme::text_muted(),
        ));
    } else {
        lines.push(Line::from(""));
        lines.push(Line::styled("press r to retry", theme::text_dim()));
    }

    let pending = Paragraph::new(lines).alignment(Alignment::Center);
    let [_, centered, _] = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Min(3),
        Constraint::Percentage(40),
    ])
    .areas(area);
    f.render_widget(pending, centered);
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    let (Some(user), Some(site)) = (app.user_summary(), app.site_summary()) else {
        return;
    };

    let band_count = user.categories_read.len().min(TOP_CATEGORY_COUNT).max(1) as u16;
    let sections = Layout::vertical([
        Constraint::Length(layout::SECTION_TITLE_HEIGHT + layout::STATCARD_ROW_HEIGHT),
        Constraint::Length(layout::SECTION_TITLE_HEIGHT + layout::DONUT_SECTION_HEIGHT),
        Constraint::Length(layout::SECTION_TITLE_HEIGHT + band_count * layout::BAR_BAND_HEIGHT),
        Constraint::Length(layout::SECTION_TITLE_HEIGHT + layout::FAVORITES_HEIGHT),
        Constraint::Length(layout::SECTION_TITLE_HEIGHT + layout::SHEET_LIST_HEIGHT),
        Constraint::Length(layout::SECTION_TITLE_HEIGHT + layout::SHEET_LIST_HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);

    let content = render_section(f, sections[0], "Your Overall Activity", app.lang);
    let cards = [
        StatCard::new("\u{25a4}", "Texts Read", user.texts_read),
        StatCard::new("\u{25a5}", "Sheets Read", user.sheets_read),
        StatCard::new("+", "Sheets Created", user.sheets_this_period),
    ];
    render_stat_cards(f, content, &cards, app.lang);

    let content = render_section(f, sections[1], "Your Reading by Category", app.lang);
    let [left, right] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(content);
    render_donut(
        f,
        left,
        tr(app.lang, "Your Reading"),
        &user.categories_read,
        app.lang,
    );
    render_donut(
        f,
        right,
        tr(app.lang, "Average Sefaria User"),
        &site.categories_read,
        app.lang,
    );

    let content = render_section(f, sections[2], "Your Top Categories", app.lang);
    render_category_bars(f, content, &user.categories_read, &site.categories_read, app.lang);

    let content = render_section(f, sections[3], "Your Favorite Texts", app.lang);
    render_favorite_texts(f, content, &user.most_viewed_refs, app.lang);

    let content = render_section(f, sections[4], "Your Favorite Sheets", app.lang);
    render_sheet_list(f, content, &user.most_viewed_sheets, false, app.lang);

    let content = render_section(f, sections[5], "Your Most Popular Sheets", app.lang);
    render_sheet_list(f, content, &user.popular_sheets, true, app.lang);
}

/// Draw a section heading and return the content area beneath it.
fn render_section(f: &mut Frame, area: Rect, title: &str, lang: InterfaceLang) -> Rect {
    let [title_area, content] = Layout::vertical([
        Constraint::Length(layout::SECTION_TITLE_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);
    let heading = Paragraph::new(tr(lang, title)).style(theme::section_heading());
    f.render_widget(heading, title_area);
    content
}

/// The favorite texts block lays its links out in three columns, filled
/// row-major.
fn render_favorite_texts(f: &mut Frame, area: Rect, refs: &[RefLink], lang: InterfaceLang) {
    if refs.is_empty() {
        let notice = Paragraph::new(tr(lang, "No reading data")).style(theme::text_dim());
        f.render_widget(notice, area);
        return;
    }

    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .spacing(2)
    .split(area);

    for (i, column) in columns.iter().enumerate() {
        let lines: Vec<Line> = refs
            .iter()
            .skip(i)
            .step_by(3)
            .take(column.height as usize)
            .map(|r| {
                let label = match lang {
                    InterfaceLang::Hebrew if !r.he.is_empty() => r.he.as_str(),
                    _ => r.en.as_str(),
                };
                Line::styled(
                    truncate_with_ellipsis(label, column.width as usize),
                    Style::default().fg(theme::ACCENT_PRIMARY),
                )
            })
            .collect();
        f.render_widget(Paragraph::new(lines), *column);
    }
}

fn render_sheet_list(
    f: &mut Frame,
    area: Rect,
    sheets: &[SheetListing],
    with_views: bool,
    lang: InterfaceLang,
) {
    if sheets.is_empty() {
        let notice = Paragraph::new(tr(lang, "No reading data")).style(theme::text_dim());
        f.render_widget(notice, area);
        return;
    }

    let rows_per_sheet = if with_views { 2 } else { 1 };
    let visible = (area.height as usize / rows_per_sheet).max(1);

    let mut lines: Vec<Line> = Vec::new();
    for sheet in sheets.iter().take(visible) {
        lines.push(Line::styled(
            truncate_with_ellipsis(&sheet.title, area.width as usize),
            theme::text_primary(),
        ));
        if with_views {
            lines.push(Line::styled(
                format!("{} {}", format_count(sheet.views), tr(lang, "Views")),
                theme::text_muted(),
            ));
        }
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn pad_horizontal(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}
