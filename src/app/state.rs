use strum_macros::{Display, EnumIter};

use crate::ui::UI_TEXT;

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Page {
    #[default]
    Main,
    Analysis,
    Trades,
    Insights,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Main => &UI_TEXT.nav_main,
            Page::Analysis => &UI_TEXT.nav_analysis,
            Page::Trades => &UI_TEXT.nav_trades,
            Page::Insights => &UI_TEXT.nav_insights,
        }
    }
}
