//! The state type handlers extract.

use crate::bootstrap::ServerContext;
use std::sync::Arc;

/// State handed to every handler: an Arc-wrapped [`ServerContext`]
/// holding the todo service.
pub type AppState = Arc<ServerContext>;
