use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct CartScreenState {
    /// Index into the cart lines.
    pub selected: usize,
    pub pay_with_bonus: bool,
    /// An order request is in flight; the submit key is disabled.
    pub pending: bool,
    pub error: Option<String>,
}

impl Default for CartScreenState {
    fn default() -> Self {
        Self {
            selected: 0,
            pay_with_bonus: true,
            pending: false,
            error: None,
        }
    }
}

impl UiState for CartScreenState {}
