use crate::api::ReferralSummary;
use crate::ui::fetch::FetchIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ReferralsIntent {
    Fetch(FetchIntent<ReferralSummary>),
    Copied,
    CopyFailed { message: String },
}

impl Intent for ReferralsIntent {}
