mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ShopIntent;
pub use reducer::ShopReducer;
pub use state::ShopState;
pub use view::{format_price, render_shop};
