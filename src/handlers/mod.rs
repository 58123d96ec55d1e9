// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod echo;
mod health;
mod metrics;
mod root;
mod shared_types;

// Core handlers
pub use health::health_check;
pub use metrics::metrics_handler;
pub use root::root_handler;

// Envelope handlers
pub use echo::echo_payload;
pub use shared_types::Success;
