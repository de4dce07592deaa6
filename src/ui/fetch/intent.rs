use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FetchIntent<T> {
    /// A request with this generation was sent.
    Start { generation: u64 },
    Loaded { generation: u64, data: T },
    Failed { generation: u64, message: String },
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
