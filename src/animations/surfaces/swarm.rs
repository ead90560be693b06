use crate::animations::common::{uniform, Animation, Frame, Schedule};
use crate::animations::AnimationOptions;
use crate::error::{Error, Result};
use crate::payload::{Payload, Point3D, PointCloud};
use rayon::prelude::*;

const DEFAULT_PARTICLES: usize = 100_000;
const DEFAULT_BOUND: f32 = 50.0;
const DEFAULT_SPEED: f32 = 0.1;

/// Teleport a coordinate that left `[-bound, bound]` to the opposite extreme.
fn wrap(coordinate: f32, bound: f32) -> f32 {
    if coordinate > bound {
        -bound
    } else if coordinate < -bound {
        bound
    } else {
        coordinate
    }
}

/// Free particles drifting with constant velocity inside a wrapping cube.
#[derive(Clone, Debug)]
pub struct ParticleSwarm {
    bound: f32,
    positions: Vec<[f32; 3]>,
    velocities: Vec<[f32; 3]>,
}

impl ParticleSwarm {
    /// Scatter `count` particles uniformly in `[-bound, bound)³` with velocities in `[-speed, speed)³`
    pub fn random(count: usize, bound: f32, speed: f32, rng: &mut fastrand::Rng) -> Self {
        let mut sample = |extent: f32| {
            [uniform(rng, -extent, extent), uniform(rng, -extent, extent), uniform(rng, -extent, extent)]
        };
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(sample(bound));
            velocities.push(sample(speed));
        }
        Self { bound, positions, velocities }
    }

    pub fn from_particles(bound: f32, positions: Vec<[f32; 3]>, velocities: Vec<[f32; 3]>) -> Result<Self> {
        if positions.len() != velocities.len() {
            let (positions, velocities) = (positions.len(), velocities.len());
            return Err(Error::config(format!("{positions} positions given for {velocities} velocities")));
        }
        Ok(Self { bound, positions, velocities })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Advance every particle by one explicit Euler step, wrapping each axis independently
    pub fn step(&mut self) {
        let bound = self.bound;
        self.positions.par_iter_mut().zip(self.velocities.par_iter()).for_each(|(position, velocity)| {
            for (coordinate, delta) in position.iter_mut().zip(velocity) {
                *coordinate = wrap(*coordinate + delta, bound);
            }
        });
    }

    pub fn points(&self) -> PointCloud {
        self.positions.iter().copied().map(Point3D::from).collect()
    }
}

/// Particle swarm - A dense cloud of drifting particles.
///
/// The swarm is created when a run starts and then mutated in place frame after frame.
pub struct SwarmAnimator {
    particles: usize,
    bound: f32,
    speed: f32,
    /// Starting state used instead of a random scatter, if any
    prepared: Option<ParticleSwarm>,
    swarm: Option<ParticleSwarm>,
    rng: fastrand::Rng,
    schedule: Schedule,
    tag: String,
}

impl SwarmAnimator {
    pub const TAG: &'static str = "animated_particle_swarm_plot";

    pub(crate) fn new(options: &AnimationOptions) -> Result<Self> {
        let particles = options.particles.unwrap_or(DEFAULT_PARTICLES);
        if particles == 0 {
            return Err(Error::config("particle swarms need at least one particle"));
        }
        let schedule = options.schedule_or(Schedule::frames(200));
        schedule.validate()?;
        Ok(Self {
            particles,
            bound: DEFAULT_BOUND,
            speed: DEFAULT_SPEED,
            prepared: None,
            swarm: None,
            rng: options.random_source(),
            schedule,
            tag: options.tag_or(Self::TAG),
        })
    }

    /// Start every run from `swarm` instead of a random scatter
    pub fn with_swarm(mut self, swarm: ParticleSwarm) -> Self {
        self.particles = swarm.len();
        self.prepared = Some(swarm);
        self
    }

    /// The live simulation, if a run has started
    pub fn swarm(&self) -> Option<&ParticleSwarm> {
        self.swarm.as_ref()
    }
}

impl Animation for SwarmAnimator {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn start(&mut self) {
        let swarm = match &self.prepared {
            Some(prepared) => prepared.clone(),
            None => ParticleSwarm::random(self.particles, self.bound, self.speed, &mut self.rng),
        };
        self.swarm = Some(swarm);
    }

    fn render_frame(&mut self, _frame: Frame) -> Payload {
        if self.swarm.is_none() {
            self.start();
        }
        let Some(swarm) = self.swarm.as_mut() else {
            return Payload::Points3d(Vec::new());
        };
        swarm.step();
        Payload::Points3d(swarm.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(50.0, 0.1, -50.0)]
    #[case(-50.0, -0.1, 50.0)]
    #[case(49.0, 0.5, 49.5)]
    #[case(50.0, 0.0, 50.0)]
    fn wrap_teleports(#[case] start: f32, #[case] velocity: f32, #[case] expected: f32) {
        let mut swarm =
            ParticleSwarm::from_particles(50.0, vec![[start, 0.0, 0.0]], vec![[velocity, 0.0, 0.0]]).unwrap();
        swarm.step();
        assert_eq!(swarm.points()[0].x, expected);
    }

    #[test]
    fn axes_wrap_independently() {
        let mut swarm = ParticleSwarm::from_particles(50.0, vec![[50.0, -50.0, 10.0]], vec![[0.1, -0.1, 1.0]]).unwrap();
        swarm.step();
        assert_eq!(swarm.points()[0], Point3D::new(-50.0, 50.0, 11.0));
    }

    #[test]
    fn random_swarm_within_bounds() {
        let mut rng = fastrand::Rng::with_seed(9);
        let swarm = ParticleSwarm::random(1000, 50.0, 0.1, &mut rng);
        assert_eq!(swarm.len(), 1000);
        for [x, y, z] in &swarm.positions {
            assert!([x, y, z].iter().all(|c| (-50.0..50.0).contains(*c)));
        }
        for velocity in &swarm.velocities {
            assert!(velocity.iter().all(|v| (-0.1..0.1).contains(v)));
        }
    }

    #[test]
    fn mismatched_particles_rejected() {
        assert!(ParticleSwarm::from_particles(1.0, vec![[0.0; 3]], vec![]).is_err());
    }

    #[test]
    fn state_persists_across_frames() {
        let swarm = ParticleSwarm::from_particles(50.0, vec![[0.0, 0.0, 0.0]], vec![[1.0, 2.0, 3.0]]).unwrap();
        let options = AnimationOptions { frames: Some(3), ..Default::default() };
        let mut animator = SwarmAnimator::new(&options).unwrap().with_swarm(swarm);
        animator.start();

        let frames: Vec<_> = animator.schedule().iter().collect();
        let mut last = None;
        for frame in frames {
            last = Some(animator.render_frame(frame));
        }
        assert_eq!(last, Some(Payload::Points3d(vec![Point3D::new(3.0, 6.0, 9.0)])));

        // A new run starts over.
        animator.start();
        let payload = animator.render_frame(Frame { index: 0, time: 0.0 });
        assert_eq!(payload, Payload::Points3d(vec![Point3D::new(1.0, 2.0, 3.0)]));
    }

    #[test]
    fn renders_without_explicit_start() {
        let options = AnimationOptions { particles: Some(10), seed: Some(1), ..Default::default() };
        let mut animator = SwarmAnimator::new(&options).unwrap();
        assert!(animator.swarm().is_none());
        assert_eq!(animator.render_frame(Frame { index: 0, time: 0.0 }).element_count(), 10);
        assert!(animator.swarm().is_some());
    }
}
