//! Cart and checkout screen. Line data lives in [`CartStore`]; this state
//! only covers selection, payment choice and the order request.
//!
//! [`CartStore`]: crate::cart::CartStore

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CartScreenIntent;
pub use reducer::CartScreenReducer;
pub use state::CartScreenState;
pub use view::render_cart;
