//! Scenario files.
//!
//! A scenario lists the bodies to simulate and, optionally, overrides for the
//! physical constants and the force evaluation mode:
//!
//! ```yaml
//! distance_unit: au          # positions in AU ("meters" is the default)
//! force_evaluation: snapshot # or "sequential"
//! trail_limit: 2000          # omit to keep every point
//! bodies:
//!   - name: sun
//!     position: [0.0, 0.0]
//!     mass: 1.98892e30
//!     radius: 30
//!     color: [255, 255, 0]
//!     anchor: true
//!   - name: earth
//!     position: [-1.0, 0.0]
//!     velocity: [0.0, 29783.0]   # m/s; omit for a circular orbit of the anchor
//!     mass: 5.9742e24
//!     radius: 16
//! ```

use serde::Deserialize;

use std::fs;
use std::path::Path;

use crate::error::SimError;
use crate::planet::Planet;
use crate::simulation::{Constants, ForceEvaluation};
use crate::trails::TrailLimit;
use crate::{tools, Body, Float, Point, Rgba, Vector, AU, GRAV_CONST, TIMESTEP};

pub const WHITE: [u8; 3] = [255, 255, 255];
pub const YELLOW: [u8; 3] = [255, 255, 0];
pub const BLUE: [u8; 3] = [16, 10, 199];
pub const RED: [u8; 3] = [199, 16, 10];
pub const DARK_GREY: [u8; 3] = [80, 78, 81];

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Meters,
    Au,
}

impl DistanceUnit {
    #[inline]
    fn meters(self) -> Float {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Au => AU,
        }
    }
}

/// Initial state of one body.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub name: String,
    pub position: [Float; 2], // In the scenario's distance unit
    #[serde(default)]
    pub velocity: Option<[Float; 2]>, // m/s
    pub mass: Float, // kg
    pub radius: f32, // Pixels, only used for drawing
    #[serde(default = "default_color")]
    pub color: [u8; 3],
    #[serde(default)]
    pub anchor: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default = "default_grav_const")]
    pub grav_const: Float,
    #[serde(default = "default_timestep")]
    pub timestep: Float,
    #[serde(default)]
    pub distance_unit: DistanceUnit,
    #[serde(default)]
    pub force_evaluation: ForceEvaluation,
    #[serde(default)]
    pub trail_limit: Option<usize>,
    pub bodies: Vec<BodyConfig>,
}

fn default_grav_const() -> Float {
    GRAV_CONST
}

fn default_timestep() -> Float {
    TIMESTEP
}

fn default_color() -> [u8; 3] {
    WHITE
}

#[inline]
pub fn rgba(rgb: [u8; 3]) -> Rgba {
    [rgb[0] as f32 / 255.0, rgb[1] as f32 / 255.0, rgb[2] as f32 / 255.0, 1.0]
}

impl BodyConfig {
    fn new(name: &str, position: [Float; 2], velocity: [Float; 2], mass: Float, radius: f32, color: [u8; 3]) -> Self {
        Self {
            name: name.to_owned(),
            position,
            velocity: Some(velocity),
            mass,
            radius,
            color,
            anchor: false,
        }
    }
}

impl ScenarioConfig {
    /// The sun with mercury, venus, earth and mars, all starting on the x axis.
    /// Masses are written as mantissa times power of ten; those products are
    /// not always the same doubles as the equivalent `e` literals.
    pub fn inner_solar_system() -> Self {
        let mut sun = BodyConfig::new("sun", [0.0, 0.0], [0.0, 0.0], 1.98892 * 1e30, 30.0, YELLOW);
        sun.anchor = true;

        Self {
            grav_const: GRAV_CONST,
            timestep: TIMESTEP,
            distance_unit: DistanceUnit::Au,
            force_evaluation: ForceEvaluation::default(),
            trail_limit: None,
            bodies: vec![
                sun,
                BodyConfig::new("earth", [-1.0, 0.0], [0.0, 29.783e3], 5.9742 * 1e24, 16.0, BLUE),
                BodyConfig::new("mars", [-1.524, 0.0], [0.0, 24.077e3], 6.36 * 1e23, 12.0, RED),
                BodyConfig::new("mercury", [0.387, 0.0], [0.0, -47.4e3], 3.30 * 1e23, 8.0, DARK_GREY),
                BodyConfig::new("venus", [0.723, 0.0], [0.0, -35.02e3], 4.8685 * 1e24, 14.0, WHITE),
            ],
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, SimError> {
        serde_yaml::from_str(yaml).map_err(|e| SimError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn constants(&self) -> Constants {
        Constants {
            grav_const: self.grav_const,
            timestep: self.timestep,
        }
    }

    /// Builds the bodies in file order. A body without a velocity is put on a
    /// circular orbit of the anchor.
    pub fn build_planets(&self) -> Result<Vec<Planet>, SimError> {
        let scale = self.distance_unit.meters();
        let limit = TrailLimit::from(self.trail_limit);

        let mut planets: Vec<Planet> = self
            .bodies
            .iter()
            .map(|bc| {
                let position = Point::new(bc.position[0] * scale, bc.position[1] * scale);
                let velocity = bc.velocity.map_or_else(Vector::zeros, |v| Vector::new(v[0], v[1]));
                let planet = Planet::new(bc.name.as_str(), position, velocity, bc.mass, bc.radius, rgba(bc.color))
                    .with_trail_limit(limit);

                if bc.anchor {
                    planet.anchor()
                } else {
                    planet
                }
            })
            .collect();

        let anchor = planets.iter().find(|p| p.is_anchor()).map(Planet::state);

        for (bc, planet) in self.bodies.iter().zip(planets.iter_mut()) {
            if bc.velocity.is_some() || bc.anchor {
                continue;
            }

            let anchor = anchor.as_ref().ok_or_else(|| {
                SimError::Config(format!("`{}` has no velocity and there is no anchor to orbit", bc.name))
            })?;
            let offset = planet.position() - anchor.position();
            if offset == Vector::zeros() {
                return Err(SimError::Config(format!("`{}` cannot orbit the anchor from its center", bc.name)));
            }

            *planet.velocity_mut() =
                anchor.velocity() + tools::circular_orbit_velocity(anchor.mass(), &offset, self.grav_const);
        }

        Ok(planets)
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::inner_solar_system()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_take_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - name: rock\n    position: [1.0, 2.0]\n    velocity: [0.0, 0.0]\n    mass: 5.0\n    radius: 2\n",
        )
        .unwrap();

        assert_eq!(cfg.grav_const, GRAV_CONST);
        assert_eq!(cfg.timestep, TIMESTEP);
        assert_eq!(cfg.distance_unit, DistanceUnit::Meters);
        assert_eq!(cfg.force_evaluation, ForceEvaluation::Snapshot);
        assert_eq!(cfg.trail_limit, None);
        assert_eq!(cfg.bodies[0].color, WHITE);
        assert!(!cfg.bodies[0].anchor);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = ScenarioConfig::from_yaml_str("bodies: []\nspeed: 3\n").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn positions_in_au_are_scaled() {
        let planets = ScenarioConfig::inner_solar_system().build_planets().unwrap();
        let earth = planets.iter().find(|p| p.name() == "earth").unwrap();

        assert_eq!(earth.position(), &Point::new(-AU, 0.0));
        assert_eq!(earth.velocity(), &Vector::new(0.0, 29_783.0));
    }

    #[test]
    fn builtin_masses_are_mantissa_times_power_of_ten() {
        let cfg = ScenarioConfig::inner_solar_system();
        let masses: Vec<Float> = cfg.bodies.iter().map(|b| b.mass).collect();

        assert_eq!(masses, vec![1.98892 * 1e30, 5.9742 * 1e24, 6.36 * 1e23, 3.30 * 1e23, 4.8685 * 1e24]);
        // Not the same doubles as the plain literals
        assert_ne!(masses[0], 1.98892e30);
        assert_ne!(masses[1], 5.9742e24);
        assert_ne!(masses[3], 3.30e23);
    }

    #[test]
    fn missing_velocity_means_circular_orbit() {
        let cfg = ScenarioConfig::from_yaml_str(
            "grav_const: 1.0\nbodies:\n  - name: star\n    position: [0.0, 0.0]\n    mass: 4.0\n    radius: 10\n    anchor: true\n  - name: moon\n    position: [1.0, 0.0]\n    mass: 1.0e-6\n    radius: 1\n",
        )
        .unwrap();
        let planets = cfg.build_planets().unwrap();

        assert_eq!(planets[0].velocity(), &Vector::zeros());
        let v = planets[1].velocity();
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn missing_velocity_without_anchor_is_an_error() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - name: drifter\n    position: [1.0, 0.0]\n    mass: 1.0\n    radius: 1\n",
        )
        .unwrap();

        assert!(matches!(cfg.build_planets(), Err(SimError::Config(_))));
    }
}
