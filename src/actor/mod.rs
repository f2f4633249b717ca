pub mod aggression;
pub mod registry;
pub mod snapshot;

pub use aggression::AggressionRecord;
pub use registry::ActorRegistry;
pub use snapshot::Actor;
