mod intent;
mod reducer;
mod state;
mod view;

pub use intent::GameIntent;
pub use reducer::GameReducer;
pub use state::{GameState, GameStats};
pub use view::render_game;
