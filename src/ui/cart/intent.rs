use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartScreenIntent {
    MoveUp { lines: usize },
    MoveDown { lines: usize },
    /// Cart lines changed; keep the selection in range.
    Clamp { lines: usize },
    TogglePayment,
    Submit,
    Succeeded,
    Failed { message: String },
}

impl Intent for CartScreenIntent {}
