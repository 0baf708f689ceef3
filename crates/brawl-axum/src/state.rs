//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext` holding the two upstream ports. Nothing in
/// it is mutable, so concurrent requests never coordinate.
pub type AppState = Arc<AxumContext>;
