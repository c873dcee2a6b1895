// Hotel room inventory: room categories, booking state and the room service

pub mod config;
pub mod inventory;
pub mod room;
pub mod service;

// Re-export key types for convenience
pub use config::{ConfigError, HotelConfig};
pub use inventory::Inventory;
pub use room::{Availability, Room, RoomCategory};
pub use service::{
    Action, Bookable, ConsoleReporter, HotelService, MemoryReporter, Reporter, RoomError,
    RoomService,
};
