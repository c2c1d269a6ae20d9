//! Askama templates for the board page.

use askama::Template;

use crate::board::CardView;

/// The whole board page.
///
/// The page reloads itself every `refresh_secs`, so relative labels keep
/// moving without client-side code.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub view: CardView,
    pub refresh_secs: u64,
    /// Whether tapping the card does anything.
    pub tappable: bool,
}

impl BoardTemplate {
    pub fn new(view: CardView, refresh_secs: u64, tappable: bool) -> Self {
        Self {
            view,
            refresh_secs,
            tappable,
        }
    }
}
