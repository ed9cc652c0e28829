use crate::{tools, error::SimError, Float, Point, Vector};

pub trait Body {
    fn name(&self) -> &str;
    fn position(&self) -> &Point;
    fn position_mut(&mut self) -> &mut Point;
    fn velocity(&self) -> &Vector;
    fn velocity_mut(&mut self) -> &mut Vector;
    fn mass(&self) -> Float;
    fn is_anchor(&self) -> bool;

    /// Force `other` exerts on `self`, pointing from `self` towards `other`.
    fn newtonian_force(&self, other: &dyn Body, grav_const: Float) -> Result<Vector, SimError> {
        // F = GmM/r^2, split into components along the angle to the other body
        let r = other.position() - self.position();
        let distance = r.norm();

        if distance == 0.0 {
            return Err(SimError::CoincidentBodies {
                body: self.name().to_owned(),
                other: other.name().to_owned(),
            });
        }

        let force = grav_const * self.mass() * other.mass() / (distance * distance);
        Ok(tools::get_components(force, tools::get_angle(&r)))
    }

    fn apply_force(&mut self, force: &Vector, dt: Float) {
        // F = m dv/dt
        // dv = (F/m) dt, divided before scaling by dt
        let dv: Vector = force / self.mass() * dt;
        *self.velocity_mut() += dv;
    }

    fn update_position(&mut self, dt: Float) {
        // dx = v dt, with v already updated this step
        let dr = self.velocity() * dt;
        *self.position_mut() += dr;
    }
}

// Macro for implementing simple functions for Body trait
macro_rules! default_body_gets {
    ($name:ident, $position:ident, $velocity:ident, $mass:ident, $anchor:ident) => {
        fn name(&self) -> &str { &self.$name }
        fn position(&self) -> &$crate::Point { &self.$position }
        fn position_mut(&mut self) -> &mut $crate::Point { &mut self.$position }
        fn velocity(&self) -> &$crate::Vector { &self.$velocity }
        fn velocity_mut(&mut self) -> &mut $crate::Vector { &mut self.$velocity }
        fn mass(&self) -> $crate::Float { self.$mass }
        fn is_anchor(&self) -> bool { self.$anchor }
    };
}

/// Kinematic state of a body frozen at one instant. Forces computed against
/// a set of these do not observe anything the current step has moved.
#[derive(new, Clone, Debug, PartialEq)]
pub struct BodyState {
    pub name: String,
    pub position: Point,
    pub velocity: Vector,
    pub mass: Float,
    pub anchor: bool,
}

impl Body for BodyState {
    default_body_gets!(name, position, velocity, mass, anchor);
}
