mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ReferralsIntent;
pub use reducer::ReferralsReducer;
pub use state::{CopyStatus, ReferralsState};
pub use view::render_referrals;
