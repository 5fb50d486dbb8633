pub mod item;
pub mod status;

pub use item::Item;
pub use status::{HealthStatus, MetricsSnapshot, RootStatus};
