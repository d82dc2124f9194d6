// Centralized layout constants for the dashboard
// All layout-related values should be defined here for maintainability

/// Standard horizontal padding for main content areas (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// Header height (user name / spinner line plus spacing)
pub const HEADER_HEIGHT: u16 = 2;

/// Footer height (help bar)
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the moderator user-id input row
pub const UID_INPUT_HEIGHT: u16 = 1;

/// Height of the mode chooser row (tabs plus trailing blank)
pub const MODE_CHOOSER_HEIGHT: u16 = 2;

/// Section heading line plus the blank line under it
pub const SECTION_TITLE_HEIGHT: u16 = 2;

/// Height of the stat card row (bordered cards)
pub const STATCARD_ROW_HEIGHT: u16 = 5;

/// Height of the donut chart row; ring plus caption line
pub const DONUT_SECTION_HEIGHT: u16 = 15;

/// Width reserved beside each donut for the per-slice legend
pub const DONUT_LEGEND_WIDTH: u16 = 26;

/// Rows per comparison-chart band: label, user bar, site bar, spacer
pub const BAR_BAND_HEIGHT: u16 = 4;

/// Height of the favorites row (three-column texts block)
pub const FAVORITES_HEIGHT: u16 = 6;

/// Height of each sheet list section
pub const SHEET_LIST_HEIGHT: u16 = 6;

// -----------------------------------------------------------------------------
// Donut geometry (canvas units, ring centered at the origin)
// -----------------------------------------------------------------------------

/// Outer radius of the donut ring
pub const DONUT_OUTER_RADIUS: f64 = 1.0;

/// Inner radius of the donut ring
pub const DONUT_INNER_RADIUS: f64 = 0.74;

/// Radius at which arc labels are anchored
pub const DONUT_LABEL_RADIUS: f64 = 0.42;

/// Canvas bounds; slightly larger than the ring so separators never clip
pub const DONUT_CANVAS_BOUND: f64 = 1.12;
