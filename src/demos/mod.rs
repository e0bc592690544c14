//! Interactive demos driven one tick at a time
//!
//! Each demo owns only the state that must survive between ticks (a drag
//! flag, a lever angle, the last valid contact). Everything else is
//! recomputed from the current [`PointerInput`].

pub mod arm;
pub mod gravity;
pub mod lever;

pub use arm::ArmDemo;
pub use gravity::GravityDemo;
pub use lever::LeverDemo;

use crate::error::KernelResult;
use crate::renderer::DrawSink;
use crate::settings::Settings;
use crate::sim::PointerInput;

/// A tick-driven demo
pub trait Demo {
    /// Short identifier used in logs and output
    fn name(&self) -> &'static str;

    /// Advance by one tick using this tick's pointer sample
    fn tick(&mut self, input: &PointerInput);

    /// Emit this tick's draw commands in painter's order
    fn draw(&self, sink: &mut dyn DrawSink);
}

/// Build every demo from `settings`
///
/// Fails if any demo cannot be constructed; no demo starts in that case.
pub fn build_all(settings: &Settings) -> KernelResult<Vec<Box<dyn Demo>>> {
    Ok(vec![
        Box::new(ArmDemo::new(settings)?),
        Box::new(LeverDemo::new(settings)?),
        Box::new(GravityDemo::new(settings)?),
    ])
}
