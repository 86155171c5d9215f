pub mod app;
pub mod config;
pub mod resolver;
pub mod slots;
pub mod timezones;

pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use resolver::{ResolveError, ZoneResolver};
pub use slots::{find_overlapping_slots, AcceptanceWindow, MeetingSlot, SlotError};
