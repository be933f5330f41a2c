//! Terminal-state detection for tic-tac-toe.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{LINES, WinningLine, check_winner};
