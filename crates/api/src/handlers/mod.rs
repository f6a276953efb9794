//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! validate input through `skilltrack_core`, delegate persistence to the
//! repositories in `skilltrack_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod category;
pub mod ml;
pub mod progress;
pub mod skill;
