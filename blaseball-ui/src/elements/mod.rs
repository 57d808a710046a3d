mod badge;
mod counter;
mod headline;
mod stat;
mod team_score;

use core::fmt::Debug;

use embedded_graphics::primitives::Rectangle;

pub use badge::{draw_badge, draw_title};
pub use counter::{draw_counter, draw_footer, draw_subtitle, draw_versus};
pub use headline::draw_headline;
pub use stat::draw_stat;
pub use team_score::draw_team_score;

use crate::{config, AppDrawTarget, UiError};

/// Blanks `area` to paper before something is redrawn over it.
pub fn clear_area<D: AppDrawTarget<E>, E: Debug>(
    display: &mut D,
    area: Rectangle,
) -> Result<(), UiError<E>> {
    display
        .fill_solid(&area, config::COLOR_PAPER)
        .map_err(UiError::Display)
}
