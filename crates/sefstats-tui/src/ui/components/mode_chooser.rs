//! Time-window chooser: two tab-style buttons, the active one highlighted.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use sefstats_core::models::TimeMode;

use crate::ui::i18n::{tr, InterfaceLang};
use crate::ui::theme;

pub fn render_mode_chooser(f: &mut Frame, area: Rect, active: TimeMode, lang: InterfaceLang) {
    let mut spans: Vec<Span> = Vec::with_capacity(TimeMode::ALL.len() * 2);
    for (i, mode) in TimeMode::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", theme::text_dim()));
        }
        let style = if mode == active {
            theme::tab_active()
        } else {
            theme::tab_inactive()
        };
        spans.push(Span::styled(format!(" {} ", tr(lang, mode.label())), style));
    }

    let chooser = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(chooser, area);
}
