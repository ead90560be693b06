use super::common::{Animation, Frame, Schedule};
use super::AnimationOptions;
use crate::error::{Error, Result};
use crate::payload::{Payload, Point3D, PointCloud};
use std::f32::consts::PI;

const BRANCHING: usize = 8;
const DEFAULT_CEILING: u32 = 8;

/// Generates stochastic fractal point clouds.
///
/// Every point of depth `d > 0` spawns [`BRANCHING`] children scattered inside a ball around it
/// whose radius halves at each level; the leaves form the cloud.
pub struct FractalCloudGenerator {
    rng: fastrand::Rng,
    ceiling: u32,
}

impl FractalCloudGenerator {
    pub fn new(rng: fastrand::Rng) -> Self {
        Self { rng, ceiling: DEFAULT_CEILING }
    }

    /// Change the maximum depth `generate` accepts
    pub fn with_ceiling(mut self, ceiling: u32) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// The number of points a cloud of the given depth has, if it can be addressed at all
    pub fn point_count(depth: u32) -> Option<usize> {
        let count = BRANCHING.checked_pow(depth)?;
        // A single allocation can't exceed isize::MAX bytes.
        let bytes = count.checked_mul(std::mem::size_of::<Point3D>())?;
        (bytes <= isize::MAX as usize).then_some(count)
    }

    pub fn check_depth(&self, depth: u32) -> Result<()> {
        if depth > self.ceiling || Self::point_count(depth).is_none() {
            return Err(Error::ResourceLimit { requested: depth, ceiling: self.ceiling });
        }
        Ok(())
    }

    /// Generate exactly `8^depth` points, depth first.
    pub fn generate(&mut self, origin: Point3D, radius: f32, depth: u32) -> Result<PointCloud> {
        self.check_depth(depth)?;

        let mut points = Vec::with_capacity(Self::point_count(depth).unwrap_or_default());
        let mut pending = vec![(origin, radius, depth)];
        while let Some((origin, radius, depth)) = pending.pop() {
            if depth == 0 {
                points.push(origin);
                continue;
            }
            let children: Vec<_> = (0..BRANCHING).map(|_| self.scatter(origin, radius)).collect();
            // Reversed so the first child is expanded first.
            pending.extend(children.into_iter().rev().map(|child| (child, radius * 0.5, depth - 1)));
        }
        Ok(points)
    }

    /// A random point in the ball of `radius / 2` around `origin`
    fn scatter(&mut self, origin: Point3D, radius: f32) -> Point3D {
        let polar = (2.0 * self.rng.f32() - 1.0).acos();
        let azimuth = 2.0 * PI * self.rng.f32();
        let r = radius * self.rng.f32() * 0.5;
        Point3D::new(
            origin.x + r * polar.sin() * azimuth.cos(),
            origin.y + r * polar.sin() * azimuth.sin(),
            origin.z + r * polar.cos(),
        )
    }
}

/// Fractal cloud - A fresh fractal cloud every frame, breathing in size
pub struct FractalCloudAnimator {
    generator: FractalCloudGenerator,
    depth: u32,
    schedule: Schedule,
    tag: String,
}

impl FractalCloudAnimator {
    pub const TAG: &'static str = "animated_fractal_cloud_plot";
    pub const DEFAULT_DEPTH: u32 = 6;

    pub(crate) fn new(options: &AnimationOptions) -> Result<Self> {
        let generator = FractalCloudGenerator::new(options.random_source());
        let depth = options.depth.unwrap_or(Self::DEFAULT_DEPTH);
        generator.check_depth(depth)?;
        let schedule = options.schedule_or(Schedule::linear(0.0, 2.0 * PI, 100));
        schedule.validate()?;
        Ok(Self { generator, depth, schedule, tag: options.tag_or(Self::TAG) })
    }

    fn radius(time: f32) -> f32 {
        20.0 + 5.0 * (time * 0.1).sin()
    }
}

impl Animation for FractalCloudAnimator {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    fn render_frame(&mut self, frame: Frame) -> Payload {
        let origin = Point3D::new(0.0, 0.0, 0.0);
        // The depth was checked against the ceiling on construction.
        let points = self.generator.generate(origin, Self::radius(frame.time), self.depth).unwrap_or_default();
        Payload::Points3d(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn generator() -> FractalCloudGenerator {
        FractalCloudGenerator::new(fastrand::Rng::with_seed(1234))
    }

    #[test]
    fn depth_zero_is_origin() {
        let origin = Point3D::new(1.0, -2.0, 3.5);
        assert_eq!(generator().generate(origin, 10.0, 0).unwrap(), vec![origin]);
    }

    #[rstest]
    #[case(1, 8)]
    #[case(2, 64)]
    #[case(3, 512)]
    #[case(5, 32768)]
    fn exact_point_count(#[case] depth: u32, #[case] expected: usize) {
        let points = generator().generate(Point3D::new(0.0, 0.0, 0.0), 20.0, depth).unwrap();
        assert_eq!(points.len(), expected);
        assert_eq!(FractalCloudGenerator::point_count(depth), Some(expected));
    }

    #[test]
    fn depth_above_ceiling_fails() {
        let mut generator = generator().with_ceiling(3);
        let result = generator.generate(Point3D::new(0.0, 0.0, 0.0), 1.0, 4);
        assert!(matches!(result, Err(Error::ResourceLimit { requested: 4, ceiling: 3 })));
    }

    #[rstest]
    #[case(21)]
    #[case(22)]
    #[case(u32::MAX)]
    fn unaddressable_depth_fails(#[case] depth: u32) {
        let mut generator = generator().with_ceiling(u32::MAX);
        let result = generator.generate(Point3D::new(0.0, 0.0, 0.0), 1.0, depth);
        assert!(matches!(result, Err(Error::ResourceLimit { requested, .. }) if requested == depth));
        assert_eq!(FractalCloudGenerator::point_count(depth), None);
    }

    #[test]
    fn points_stay_within_radius() {
        // Offsets shrink geometrically: r/2 + r/4 + ... < r.
        let radius = 20.0;
        let points = generator().generate(Point3D::new(5.0, 5.0, 5.0), radius, 4).unwrap();
        for point in points {
            let distance = ((point.x - 5.0).powi(2) + (point.y - 5.0).powi(2) + (point.z - 5.0).powi(2)).sqrt();
            assert!(distance < radius, "{distance}");
        }
    }

    #[test]
    fn seeded_generators_agree() {
        let first = generator().generate(Point3D::new(0.0, 0.0, 0.0), 2.0, 2).unwrap();
        let second = generator().generate(Point3D::new(0.0, 0.0, 0.0), 2.0, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn animator_rejects_deep_clouds() {
        let options = AnimationOptions { depth: Some(9), ..Default::default() };
        assert!(matches!(FractalCloudAnimator::new(&options), Err(Error::ResourceLimit { .. })));
    }

    #[test]
    fn animator_renders_configured_depth() {
        let options = AnimationOptions { depth: Some(2), frames: Some(2), seed: Some(5), ..Default::default() };
        let mut animator = FractalCloudAnimator::new(&options).unwrap();
        let payload = animator.render_frame(Frame { index: 0, time: 0.0 });
        assert_eq!(payload.element_count(), 64);
    }
}
