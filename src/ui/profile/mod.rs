//! Profile screen. Pure load-and-show, so it reuses the fetch state machine.

mod view;

use crate::api::UserProfile;
use crate::ui::fetch::{FetchIntent, FetchReducer, FetchState};

pub type ProfileState = FetchState<UserProfile>;
pub type ProfileIntent = FetchIntent<UserProfile>;
pub type ProfileReducer = FetchReducer<UserProfile>;

pub use view::{avatar_source, display_name, render_profile, AvatarSource};
