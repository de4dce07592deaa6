use crate::ui::mvi::UiState;

/// Lifecycle of one read request owned by a screen.
///
/// `generation` identifies the request that produced (or will produce) the
/// state. Results carrying another generation belong to a superseded request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Screen never visited.
    Idle,
    Loading {
        generation: u64,
    },
    Loaded {
        generation: u64,
        data: T,
    },
    Failed {
        generation: u64,
        message: String,
    },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for FetchState<T> {}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True when entering the screen should issue a request: never loaded,
    /// or the last attempt failed.
    pub fn needs_fetch(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed { .. })
    }
}
