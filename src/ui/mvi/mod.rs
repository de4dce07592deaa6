//! Model-View-Intent (MVI) primitives for the screens.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: what a screen renders
//! - **Intent**: key presses and backend results
//! - **Reducer**: pure function producing the next state
//!
//! Network calls, clipboard access and cart mutations happen in [`App`],
//! never inside a reducer.
//!
//! [`App`]: crate::ui::app::App

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
