//! Registry services built on top of a user repository.

mod shared;
mod user_registry;

pub use shared::SharedUserRegistry;
pub use user_registry::UserRegistry;
