mod intent;
mod reducer;
mod state;
mod view;

pub use intent::NewsIntent;
pub use reducer::NewsReducer;
pub use state::NewsState;
pub use view::render_news;
