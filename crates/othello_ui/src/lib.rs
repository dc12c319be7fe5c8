// Game controller and terminal front end on top of the rules and engine crates
pub mod session;
pub mod terminal;

pub use session::{GameResult, GameSession, SessionError, TurnOutcome};
pub use terminal::{run, TerminalConfig};
