//! Game logic
//!
//! An explicit state object, a pure reducer over it, and a controller that
//! owns the collaborator ports.

mod controller;
mod reducer;
mod state;

pub use controller::Game;
pub use reducer::reduce;
pub use state::{
    Effect, Feedback, FeedbackStyle, GameEvent, GameState, INITIAL_PASSES, STRIKE_LIMIT,
    Scoreboard,
};
