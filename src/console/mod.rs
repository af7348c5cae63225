mod display;
mod script;
mod terminal;

pub use display::{DisplayError, EMPTY_SYMBOL, TerminalDisplay, render_board, square_symbol};
pub use script::{MoveScript, ScriptError, ScriptedPromotions};
pub use terminal::{InputError, SessionError, parse_move_input, run_interactive_terminal, run_session};
