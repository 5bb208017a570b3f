// Property Models - Core Library
// Validated attributes, derived values, a shared counter and a dynamic attribute bag

pub mod error;
pub mod clock;
pub mod config;
pub mod logging;
pub mod entities;

// Re-export commonly used types
pub use error::{ModelError, Result};
pub use config::PersonConfig;
pub use entities::{
    Person,
    Circle,
    Vehicle, ElectricVehicle, Classify, VehicleCounter, VehicleKind, VEHICLE_COUNT,
    DynamicClass,
    ValidatedAttribute,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
