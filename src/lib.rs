//! Mechanics demos - interactive 2D statics
//!
//! Core modules:
//! - `sim`: Pure mechanics kernel (vectors, lever, channel arm, force chain, circular contact)
//! - `demos`: Tick-driven demo state machines built on the kernel
//! - `renderer`: Draw-command output handed to the host
//! - `settings`: Construction-time parameters
//! - `error`: Kernel error taxonomy

pub mod demos;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use demos::{ArmDemo, Demo, GravityDemo, LeverDemo};
pub use error::{KernelError, KernelResult};
pub use settings::{Settings, SettingsError};

/// Demo configuration constants
pub mod consts {
    /// Host tick rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Default host surface size
    pub const VIEWPORT_WIDTH: f64 = 1280.0;
    pub const VIEWPORT_HEIGHT: f64 = 720.0;

    /// Channel half-length (also the length of each arm link)
    pub const ARM_MAX_REACH: f64 = 250.0;
    /// Downward load on the arm
    pub const ARM_WEIGHT: f64 = 2.0;
    /// Arm force vectors are drawn this many times longer than their magnitude
    pub const ARM_FORCE_SCALE: f64 = 100.0;
    /// Grab radius of draggable handles
    pub const HANDLE_RADIUS: f64 = 10.0;
    /// Stroke width for links and force vectors
    pub const STROKE: f64 = 3.0;

    /// Lever beam length
    pub const LEVER_LENGTH: f64 = 500.0;
    pub const LEVER_BEAM_THICKNESS: f64 = 15.0;
    pub const LEVER_CORE_THICKNESS: f64 = 5.0;
    pub const LEVER_OUTPUT_SCALE: f64 = 50.0;

    /// Constraint circle radius for the contact demo
    pub const CONTACT_RADIUS: f64 = 300.0;
    pub const CONTACT_FORCE_SCALE: f64 = 300.0;
    /// Decimal places shown in the torque readout
    pub const TORQUE_READOUT_DECIMALS: i32 = 5;
    pub const TORQUE_READOUT_SCALE: f64 = 10.0;
}
