// 🚗 Vehicle / ElectricVehicle - Shared instance counter + classification
//
// Every construction, standard or electric, bumps one process-wide
// counter exactly once. The counter is never decremented.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// VEHICLE COUNTER
// ============================================================================

/// Monotonic construction counter
#[derive(Debug, Default)]
pub struct VehicleCounter {
    count: AtomicU64,
}

impl VehicleCounter {
    pub const fn new() -> Self {
        VehicleCounter {
            count: AtomicU64::new(0),
        }
    }

    /// Record one construction, returning the new total
    fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

/// Counter shared by every `Vehicle::new` / `ElectricVehicle::new` in the process
pub static VEHICLE_COUNT: VehicleCounter = VehicleCounter::new();

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Type-level classification label, callable without an instance
pub trait Classify {
    fn classify_vehicle(vehicle_type: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    Standard,
    Electric,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Standard => "Standard",
            VehicleKind::Electric => "Electric",
        }
    }

    /// Classify using the implementation selected by this kind
    pub fn classify(&self, vehicle_type: &str) -> String {
        match self {
            VehicleKind::Standard => Vehicle::classify_vehicle(vehicle_type),
            VehicleKind::Electric => ElectricVehicle::classify_vehicle(vehicle_type),
        }
    }
}

// ============================================================================
// VEHICLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl Vehicle {
    /// Create a vehicle, counted against `VEHICLE_COUNT`
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self::register_in(&VEHICLE_COUNT, make, model, year)
    }

    /// Create a vehicle, counted against the given counter
    pub fn register_in(
        counter: &VehicleCounter,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Self {
        Self::registered(counter, VehicleKind::Standard, make, model, year)
    }

    fn registered(
        counter: &VehicleCounter,
        kind: VehicleKind,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Self {
        let vehicle = Vehicle {
            make: make.into(),
            model: model.into(),
            year,
        };

        let total = counter.increment();
        tracing::trace!(
            kind = kind.as_str(),
            make = %vehicle.make,
            model = %vehicle.model,
            total,
            "vehicle registered"
        );
        vehicle
    }

    /// Number of vehicles constructed so far in this process
    pub fn get_vehicle_count() -> u64 {
        VEHICLE_COUNT.get()
    }

    pub fn kind(&self) -> VehicleKind {
        VehicleKind::Standard
    }
}

impl Classify for Vehicle {
    fn classify_vehicle(vehicle_type: &str) -> String {
        format!("This is a {}", vehicle_type)
    }
}

// ============================================================================
// ELECTRIC VEHICLE
// ============================================================================

/// Same fields as `Vehicle`; only the classification label differs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectricVehicle {
    #[serde(flatten)]
    vehicle: Vehicle,
}

impl ElectricVehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self::register_in(&VEHICLE_COUNT, make, model, year)
    }

    pub fn register_in(
        counter: &VehicleCounter,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Self {
        ElectricVehicle {
            vehicle: Vehicle::registered(counter, VehicleKind::Electric, make, model, year),
        }
    }

    pub fn get_vehicle_count() -> u64 {
        Vehicle::get_vehicle_count()
    }

    pub fn kind(&self) -> VehicleKind {
        VehicleKind::Electric
    }

    pub fn as_vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}

impl Deref for ElectricVehicle {
    type Target = Vehicle;

    fn deref(&self) -> &Vehicle {
        &self.vehicle
    }
}

impl Classify for ElectricVehicle {
    fn classify_vehicle(vehicle_type: &str) -> String {
        format!("This is an electric {}", vehicle_type)
    }
}

// ============================================================================
// TESTS
// ============================================================================
