//! Stat cards: bordered tiles with one headline number each.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::format::format_count;
use crate::ui::i18n::{tr, InterfaceLang};
use crate::ui::theme;

pub struct StatCard<'a> {
    pub glyph: &'a str,
    pub label: &'a str,
    pub value: u64,
}

impl<'a> StatCard<'a> {
    pub fn new(glyph: &'a str, label: &'a str, value: u64) -> Self {
        Self { glyph, label, value }
    }
}

/// Render a row of equally sized cards.
pub fn render_stat_cards(f: &mut Frame, area: Rect, cards: &[StatCard<'_>], lang: InterfaceLang) {
    if cards.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let columns = Layout::horizontal(constraints).spacing(2).split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_inactive());
        let inner = block.inner(*column);
        f.render_widget(block, *column);

        let lines = vec![
            Line::styled(
                format!("{} {}", card.glyph, format_count(card.value)),
                theme::text_bold(),
            ),
            Line::styled(tr(lang, card.label).to_string(), theme::text_muted()),
        ];
        let body = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(body, inner);
    }
}
