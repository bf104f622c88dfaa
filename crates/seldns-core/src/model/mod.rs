// ── Domain model ──
//
// The desired-state request and the result types the reconciler produces.
// Remote entities (`Domain`, `Record`) are the API wire types, re-exported
// from `seldns-api` unchanged.

pub mod outcome;
pub mod spec;

pub use outcome::{Entity, Outcome, Report};
pub use spec::{DesiredState, RecordSpec, RecordType};
