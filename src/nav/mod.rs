//! Page routing and tab navigation

mod guard;
mod tab;

pub(crate) use guard::{GuardOutcome, Page, guard};
pub(crate) use tab::{NavEntry, Tab, nav_entries};
