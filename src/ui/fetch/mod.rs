//! Load-on-entry state shared by the read-only screens.

mod intent;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::FetchState;
