use std::f64::consts::PI;

use crate::{Float, Vector};

#[inline]
pub fn get_angle(vec: &Vector) -> Float {
    vec.y.atan2(vec.x)
}

#[inline]
pub fn get_components(magnitude: Float, angle: Float) -> Vector {
    Vector::new(magnitude * angle.cos(), magnitude * angle.sin())
}

// v = sqrt(GM/r)
#[inline]
pub fn circular_orbit_speed(central_mass: Float, orbit_radius: Float, grav_const: Float) -> Float {
    (grav_const * central_mass / orbit_radius).sqrt()
}

/// Velocity for a circular, anticlockwise orbit around a body `offset` away
/// (offset measured from the central body to the orbiting one).
pub fn circular_orbit_velocity(central_mass: Float, offset: &Vector, grav_const: Float) -> Vector {
    let speed = circular_orbit_speed(central_mass, offset.norm(), grav_const);
    get_components(speed, get_angle(offset) + PI / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_round_trip_through_angle() {
        let v = Vector::new(-3.0, 4.0);
        let back = get_components(v.norm(), get_angle(&v));
        assert!((back - v).norm() < 1e-12);
    }

    #[test]
    fn orbit_velocity_is_perpendicular_to_offset() {
        let offset = Vector::new(2.0, 0.0);
        let v = circular_orbit_velocity(8.0, &offset, 1.0);

        assert!(v.dot(&offset).abs() < 1e-12);
        assert!((v.norm() - 2.0).abs() < 1e-12);
        assert!(v.y > 0.0);
    }
}
