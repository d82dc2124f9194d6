use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui;
use crate::ui::format::spinner_frame;
use crate::ui::{App, InputMode};

pub(crate) fn render(f: &mut Frame, app: &App) {
    // Fill entire frame with app background (pure black)
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Length(ui::layout::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(ui::layout::FOOTER_HEIGHT),
    ])
    .split(f.area());

    // Header: the inspected user's name once both fetches resolve
    let heading = if app.is_ready() {
        app.heading_name().unwrap_or("Reading Stats").to_string()
    } else {
        spinner_frame(app.frame()).to_string()
    };
    let header = Paragraph::new(heading)
        .style(ui::theme::text_bold())
        .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    ui::views::render_dashboard(f, app, chunks[1]);

    let (footer_text, footer_style) = if app.pending_quit {
        (
            "\u{26a0} Press Ctrl+C again to quit".to_string(),
            ui::theme::status_error(),
        )
    } else {
        (footer_hints(app), ui::theme::text_muted())
    };

    let formatted_footer = format!(
        "{}{}",
        " ".repeat(ui::layout::CONTENT_PADDING_H as usize),
        footer_text
    );
    f.render_widget(Paragraph::new(formatted_footer).style(footer_style), chunks[2]);
}

fn footer_hints(app: &App) -> String {
    if app.input_mode == InputMode::Editing {
        return "enter apply · esc done".to_string();
    }

    let mut parts = vec!["tab period"];
    if app.moderator {
        parts.push("u user id");
    }
    if app.site.is_failed() || app.user.is_failed() {
        parts.push("r retry");
    }
    parts.push("q quit");

    let mut text = parts.join(" · ");
    if let Some(updated) = app.last_updated {
        text.push_str(&format!("  ·  updated {}", updated.format("%H:%M:%S")));
    }
    text
}
