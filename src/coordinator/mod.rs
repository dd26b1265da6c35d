//! The health-check round.
//!
//! Each round spawns one probe task per configured server, waits on a
//! completion channel until every task has delivered (or is known to be
//! gone), and hands the ordered results to the reporter. Rounds repeat on
//! a fixed interval until the shutdown channel fires.

pub mod impls;
pub mod types;
