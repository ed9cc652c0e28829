#[macro_use]
extern crate derive_new;

#[macro_use]
pub mod body;
pub mod config;
pub mod error;
pub mod planet;
pub mod simulation;
pub mod tools;
pub mod trails;
pub mod view;

pub type Float = f64;
pub type Point = nalgebra::Point2<Float>;
pub type Vector = nalgebra::Vector2<Float>;
/// RGBA, each channel in 0..=1. Only the renderer reads it.
pub type Rgba = [f32; 4];

pub const AU: Float = 146.6e6 * 1000.0; // Earth to sun, meters
pub const GRAV_CONST: Float = 6.67428e-11;
pub const TIMESTEP: Float = 3600.0 * 24.0; // One simulated day per step

pub use body::{Body, BodyState};
pub use config::{BodyConfig, ScenarioConfig};
pub use error::SimError;
pub use planet::Planet;
pub use simulation::{Constants, ForceEvaluation, Simulation};
pub use trails::{Trail, TrailLimit};
pub use view::Projection;
