//! Terminal front end: the human plays the Player (White) and the minimax
//! engine answers as the Computer.

pub mod game;
pub mod input;

pub use game::{result_text, run};
pub use input::{Command, InputError, parse_command, parse_coordinate_move};
