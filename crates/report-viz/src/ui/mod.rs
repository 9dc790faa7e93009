//! 차트 화면 그리기.

mod holdings_grid;
mod layout;
mod value_chart;

pub use holdings_grid::draw_holdings_grid;
pub use layout::draw_ui;
pub use value_chart::{draw_value_chart, fit_bar_width};
