use crate::body::{Body, BodyState};
use crate::error::SimError;
use crate::simulation::Constants;
use crate::trails::{Trail, TrailLimit};
use crate::{Float, Point, Rgba, Vector};

/// A gravitating body, along with what the renderer needs to draw it.
#[derive(Clone, Debug)]
pub struct Planet {
    name: String,
    position: Point,
    velocity: Vector,
    mass: Float,
    radius: f32, // More for drawing than anything really
    color: Rgba,
    anchor: bool,
    distance_to_anchor: Float,
    trail: Trail,
}

impl Planet {
    pub fn new(name: impl Into<String>, position: Point, velocity: Vector, mass: Float, radius: f32, color: Rgba) -> Planet {
        Planet {
            name: name.into(),
            position,
            velocity,
            mass,
            radius,
            color,
            anchor: false,
            distance_to_anchor: 0.0,
            trail: Trail::new(TrailLimit::Unbounded),
        }
    }

    /// Marks this body as the one distances are measured against. It still
    /// moves under gravity like every other body.
    pub fn anchor(mut self) -> Planet {
        self.anchor = true;
        self
    }

    pub fn with_trail_limit(mut self, limit: TrailLimit) -> Planet {
        self.trail = Trail::new(limit);
        self
    }

    /// Force `other` exerts on this body. Measuring against the anchor also
    /// refreshes `distance_to_anchor`, nothing else does.
    pub fn attraction(&mut self, other: &dyn Body, grav_const: Float) -> Result<Vector, SimError> {
        let force = self.newtonian_force(other, grav_const)?;

        if other.is_anchor() {
            self.distance_to_anchor = (other.position() - self.position).norm();
        }

        Ok(force)
    }

    /// Moves this body forward one timestep under the pull of `others`, which
    /// must not include the body itself.
    pub fn advance<'a, I>(&mut self, others: I, constants: &Constants) -> Result<(), SimError>
    where
        I: IntoIterator<Item = &'a dyn Body>,
    {
        // A failed step must not leave a half-updated anchor distance behind
        let previous_distance = self.distance_to_anchor;
        let total_force = match self.net_force(others, constants.grav_const) {
            Ok(force) => force,
            Err(err) => {
                self.distance_to_anchor = previous_distance;
                return Err(err);
            }
        };

        self.apply_force(&total_force, constants.timestep);
        self.update_position(constants.timestep);
        self.trail.push(self.position);

        Ok(())
    }

    fn net_force<'a, I>(&mut self, others: I, grav_const: Float) -> Result<Vector, SimError>
    where
        I: IntoIterator<Item = &'a dyn Body>,
    {
        let mut total_force = Vector::zeros();
        for other in others {
            total_force += self.attraction(other, grav_const)?;
        }

        if !(total_force.x.is_finite() && total_force.y.is_finite()) {
            return Err(SimError::NonFiniteForce { body: self.name.clone() });
        }
        Ok(total_force)
    }

    pub fn state(&self) -> BodyState {
        BodyState::new(self.name.clone(), self.position, self.velocity, self.mass, self.anchor)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Meters to the anchor as of the last time it was measured.
    #[inline]
    pub fn distance_to_anchor(&self) -> Float {
        self.distance_to_anchor
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

impl Body for Planet {
    default_body_gets!(name, position, velocity, mass, anchor);
}
