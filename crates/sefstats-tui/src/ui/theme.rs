// Centralized theme system for consistent UI styling
// All colors and styles are defined here - edit this file to change the look

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

/// Active mode tab background
pub const BG_TAB_ACTIVE: Color = Color::Rgb(28, 28, 32);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Primary accent - muted blue (focus, interactive elements)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

// -----------------------------------------------------------------------------
// Border Colors
// -----------------------------------------------------------------------------

/// Inactive border
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// -----------------------------------------------------------------------------
// Chart Colors
// -----------------------------------------------------------------------------

/// The site-wide bar in the comparison chart - neutral, recedes behind the
/// colored user bar
pub const BAR_SITE: Color = Color::Rgb(92, 92, 90);

/// Caption text drawn over or beside the site bar
pub const BAR_CAPTION: Color = Color::Rgb(153, 153, 153);

/// Separators between donut arcs
pub const ARC_SEPARATOR: Color = Color::White;

/// The synthetic "Etc" bucket
pub const ETC_COLOR: Color = Color::Rgb(120, 120, 120);

/// Fixed colors for the library's top-level categories, matching the site
/// palette. Lookup is by exact category name.
pub const CATEGORY_PALETTE: [(&str, Color); 16] = [
    ("Tanakh", Color::Rgb(0, 78, 95)),        // deep teal
    ("Mishnah", Color::Rgb(90, 153, 183)),    // light blue
    ("Talmud", Color::Rgb(204, 180, 121)),    // gold
    ("Midrash", Color::Rgb(93, 149, 111)),    // green
    ("Halakhah", Color::Rgb(128, 47, 62)),    // maroon
    ("Kabbalah", Color::Rgb(89, 65, 118)),    // purple
    ("Liturgy", Color::Rgb(171, 78, 102)),    // rose
    ("Jewish Thought", Color::Rgb(127, 133, 169)), // slate
    ("Philosophy", Color::Rgb(127, 133, 169)),
    ("Tosefta", Color::Rgb(0, 130, 127)),     // sea green
    ("Chasidut", Color::Rgb(151, 179, 134)),  // sage
    ("Musar", Color::Rgb(124, 64, 111)),      // plum
    ("Responsa", Color::Rgb(203, 97, 88)),    // clay
    ("Second Temple", Color::Rgb(124, 107, 138)),
    ("Reference", Color::Rgb(212, 137, 108)), // ochre
    ("Commentary", Color::Rgb(72, 113, 191)), // blue
];

/// Fallback palette for categories outside the fixed table
pub const FALLBACK_PALETTE: [Color; 8] = [
    Color::Rgb(86, 156, 214),  // Muted blue
    Color::Rgb(106, 153, 85),  // Muted green
    Color::Rgb(169, 154, 203), // Muted purple
    Color::Rgb(206, 145, 120), // Muted orange
    Color::Rgb(78, 154, 154),  // Muted teal
    Color::Rgb(180, 180, 120), // Muted yellow
    Color::Rgb(180, 100, 100), // Muted red
    Color::Rgb(140, 140, 170), // Muted lavender
];

/// Get the display color for a category. Fixed palette entries first, the
/// "Etc" bucket gets its neutral, and anything else hashes to a stable
/// fallback color so a category never changes color between renders.
pub fn category_color(name: &str) -> Color {
    if let Some((_, color)) = CATEGORY_PALETTE.iter().find(|(cat, _)| *cat == name) {
        return *color;
    }
    if name == sefstats_core::charts::ETC_NAME {
        return ETC_COLOR;
    }
    let hash: usize = name.bytes().map(|b| b as usize).sum();
    FALLBACK_PALETTE[hash % FALLBACK_PALETTE.len()]
}

// =============================================================================
// STYLE FUNCTIONS
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn section_heading() -> Style {
    text_bold()
}

pub fn status_error() -> Style {
    Style::default().fg(ACCENT_ERROR)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn input_active() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_INPUT)
}

pub fn tab_active() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .bg(BG_TAB_ACTIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(TEXT_MUTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_color_is_stable() {
        assert_eq!(category_color("Talmud"), Color::Rgb(204, 180, 121));
        assert_eq!(category_color("Etc"), ETC_COLOR);
        // Unknown categories get a deterministic fallback.
        assert_eq!(
            category_color("Geonic Literature"),
            category_color("Geonic Literature")
        );
    }
}
