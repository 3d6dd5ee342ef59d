pub mod commands;
pub mod events;
pub mod reducer;

pub use commands::AppCommand;
pub use events::DomainEvent;
pub use reducer::reduce;
