use log::{debug, info, trace, warn};
use serde::Deserialize;

use crate::body::{Body, BodyState};
use crate::config::ScenarioConfig;
use crate::error::SimError;
use crate::planet::Planet;
use crate::{Float, GRAV_CONST, TIMESTEP};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constants {
    pub grav_const: Float,
    /// Simulated seconds per step, independent of wall-clock frame time.
    pub timestep: Float,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            grav_const: GRAV_CONST,
            timestep: TIMESTEP,
        }
    }
}

/// Which positions a step measures forces against.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForceEvaluation {
    /// Every body is pulled towards where the others were at the start of
    /// the step.
    #[default]
    Snapshot,
    /// Bodies are advanced one at a time against the live collection, so a
    /// body sees the already-moved positions of those before it. Results
    /// depend on collection order.
    Sequential,
}

/// Owns the bodies and advances them all by one fixed timestep per call to
/// [`Simulation::step`].
#[derive(Clone, Debug)]
pub struct Simulation {
    bodies: Vec<Planet>,
    constants: Constants,
    mode: ForceEvaluation,
    steps: u64,
}

impl Simulation {
    pub fn new(bodies: Vec<Planet>, constants: Constants, mode: ForceEvaluation) -> Result<Self, SimError> {
        for body in &bodies {
            // Also rejects NaN
            if !(body.mass() > 0.0) {
                return Err(SimError::NonPositiveMass {
                    body: body.name().to_owned(),
                    mass: body.mass(),
                });
            }
        }

        let anchors = bodies.iter().filter(|b| b.is_anchor()).count();
        if anchors > 1 {
            warn!("{} bodies are flagged as anchor, distances follow whichever comes last", anchors);
        }

        info!(
            "simulation ready: {} bodies, {:?} force evaluation, dt = {} s",
            bodies.len(),
            mode,
            constants.timestep
        );

        Ok(Self {
            bodies,
            constants,
            mode,
            steps: 0,
        })
    }

    pub fn from_config(config: &ScenarioConfig) -> Result<Self, SimError> {
        let bodies = config.build_planets()?;
        Self::new(bodies, config.constants(), config.force_evaluation)
    }

    /// Advances every body once, in collection order. On error the step is
    /// abandoned part way: bodies before the failing one stay advanced and
    /// the step counter is left alone.
    pub fn step(&mut self) -> Result<(), SimError> {
        match self.mode {
            ForceEvaluation::Snapshot => self.step_snapshot()?,
            ForceEvaluation::Sequential => self.step_sequential()?,
        }

        self.steps += 1;
        trace!("step {} done, t = {} s", self.steps, self.elapsed());
        Ok(())
    }

    pub fn run(&mut self, steps: u64) -> Result<(), SimError> {
        for _ in 0..steps {
            self.step()?;
        }
        debug!("ran {} steps, now at step {}", steps, self.steps);
        Ok(())
    }

    fn step_snapshot(&mut self) -> Result<(), SimError> {
        let constants = self.constants;
        let snapshot: Vec<BodyState> = self.bodies.iter().map(Planet::state).collect();

        for (i, body) in self.bodies.iter_mut().enumerate() {
            let others = snapshot
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, state)| state as &dyn Body);
            body.advance(others, &constants)?;
        }
        Ok(())
    }

    fn step_sequential(&mut self) -> Result<(), SimError> {
        let constants = self.constants;

        for i in 0..self.bodies.len() {
            let (before, rest) = self.bodies.split_at_mut(i);
            if let Some((current, after)) = rest.split_first_mut() {
                let others = before
                    .iter()
                    .chain(after.iter())
                    .map(|planet| planet as &dyn Body);
                current.advance(others, &constants)?;
            }
        }
        Ok(())
    }

    #[inline]
    pub fn bodies(&self) -> &[Planet] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Planet> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn anchor(&self) -> Option<&Planet> {
        self.bodies.iter().find(|b| b.is_anchor())
    }

    #[inline]
    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    #[inline]
    pub fn mode(&self) -> ForceEvaluation {
        self.mode
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds since the start.
    #[inline]
    pub fn elapsed(&self) -> Float {
        self.steps as Float * self.constants.timestep
    }

    pub fn into_bodies(self) -> Vec<Planet> {
        self.bodies
    }
}
