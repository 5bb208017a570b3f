// Entity Models
//
// Five independent in-memory models. Each one owns its fields and
// exposes them only through validated accessors; derived values are
// computed from the stored fields on read.

pub mod person;
pub mod circle;
pub mod vehicle;
pub mod dynamic;
pub mod validated;

pub use person::Person;
pub use circle::Circle;
pub use vehicle::{Classify, ElectricVehicle, Vehicle, VehicleCounter, VehicleKind, VEHICLE_COUNT};
pub use dynamic::DynamicClass;
pub use validated::ValidatedAttribute;
