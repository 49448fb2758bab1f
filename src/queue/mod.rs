pub mod broadcaster;
pub mod handlers;
pub mod player_queue;
pub mod task;

// Re-export the main types for easy access
pub use player_queue::{Player, PlayerQueue};
pub use task::queue_task;
