//! Warning policy: global mode, per-contact precedence, dialog notices.

pub mod evaluator;
pub mod mode;
pub mod notice;

pub use evaluator::{WarningDecision, WarningReason, evaluate, should_warn};
pub use mode::WarningMode;
pub use notice::{WarningNotice, notices_for};
