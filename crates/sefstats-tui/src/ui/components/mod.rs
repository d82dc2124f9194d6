pub mod category_bars;
pub mod donut;
pub mod mode_chooser;
pub mod stat_card;

pub use category_bars::render_category_bars;
pub use donut::render_donut;
pub use mode_chooser::render_mode_chooser;
pub use stat_card::{render_stat_cards, StatCard};
