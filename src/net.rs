//! Multiplayer connection placeholder.
//!
//! There is no server yet. The shell calls this once at start-up so the hook
//! exists when one does.

/// Request a connection. Returns immediately; nothing is sent.
pub fn connect() {
    log::info!("net: connect requested (offline build, nothing to do)");
}
