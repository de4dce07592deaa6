use crate::api::ReferralSummary;
use crate::ui::fetch::FetchState;
use crate::ui::mvi::UiState;

/// Outcome of the last "copy link" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferralsState {
    pub summary: FetchState<ReferralSummary>,
    pub copy_status: Option<CopyStatus>,
}

impl UiState for ReferralsState {}

impl ReferralsState {
    pub fn referral_link(&self) -> Option<&str> {
        self.summary
            .data()
            .map(|summary| summary.referral_link.as_str())
    }
}
