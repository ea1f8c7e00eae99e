//! Poses, colours and tweens between them

use derive_more::Display;

/// Visual state of an element: opacity plus a 3D transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Fully visible, untransformed
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_scale_x(mut self, scale_x: f64) -> Self {
        self.scale_x = scale_x;
        self
    }

    pub const fn with_rotate_x(mut self, degrees: f64) -> Self {
        self.rotate_x = degrees;
        self
    }

    pub const fn with_rotate_y(mut self, degrees: f64) -> Self {
        self.rotate_y = degrees;
        self
    }

    /// Linear interpolation between two poses, `t` clamped to [0, 1]
    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            scale_x: mix(self.scale_x, to.scale_x),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            rotate_y: mix(self.rotate_y, to.rotate_y),
        }
    }

    pub fn opacity_css(&self) -> String {
        css_number(self.opacity.clamp(0.0, 1.0))
    }

    /// CSS `transform` value; `none` for the identity transform
    pub fn transform_css(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!(
                "translate3d({}px, {}px, 0px)",
                css_number(self.x),
                css_number(self.y)
            ));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", css_number(self.scale)));
        }
        if self.scale_x != 1.0 {
            parts.push(format!("scaleX({})", css_number(self.scale_x)));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", css_number(self.rotate_x)));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", css_number(self.rotate_y)));
        }

        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Format a number for CSS with at most three decimals
pub fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

/// Easing curves used by toggle playback, as CSS timing functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Easing {
    #[display("linear")]
    Linear,
    #[display("cubic-bezier(0.5, 1, 0.89, 1)")]
    Power2Out,
    #[default]
    #[display("cubic-bezier(0.33, 1, 0.68, 1)")]
    Power3Out,
    #[display("cubic-bezier(0.45, 0, 0.55, 1)")]
    Power2InOut,
    #[display("cubic-bezier(0.34, 1.56, 0.64, 1)")]
    BackOut,
    #[display("cubic-bezier(0.37, 0, 0.63, 1)")]
    SineInOut,
}

/// Tween between two poses
///
/// In toggle mode the tween plays over `duration_ms` with `easing`, starting
/// after `delay_ms` plus `stagger_ms` per part. In scrub mode only `from`,
/// `to` and `scrub_spread` matter: progress maps linearly onto the poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub stagger_ms: u32,
    pub easing: Easing,
    /// Fraction of a scrub used to offset successive parts, in [0, 1)
    pub scrub_spread: f64,
}

impl Tween {
    pub const fn new(from: Pose, to: Pose) -> Self {
        Self {
            from,
            to,
            duration_ms: 500,
            delay_ms: 0,
            stagger_ms: 0,
            easing: Easing::Power3Out,
            scrub_spread: 0.0,
        }
    }

    /// Tween from `from` to the identity pose
    pub const fn enter(from: Pose) -> Self {
        Self::new(from, Pose::IDENTITY)
    }

    /// Tween from the identity pose to `to`
    pub const fn exit(to: Pose) -> Self {
        Self::new(Pose::IDENTITY, to)
    }

    pub const fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub const fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    pub const fn stagger(mut self, ms: u32) -> Self {
        self.stagger_ms = ms;
        self
    }

    pub const fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn spread(mut self, spread: f64) -> Self {
        self.scrub_spread = spread;
        self
    }

    pub fn pose_at(&self, progress: f64) -> Pose {
        self.from.lerp(&self.to, progress)
    }

    /// Start delay of the part at `index`
    pub fn part_delay_ms(&self, index: usize) -> u64 {
        self.delay_ms as u64 + self.stagger_ms as u64 * index as u64
    }

    /// CSS `transition` value for the part at `index`
    pub fn transition_css(&self, index: usize) -> String {
        let delay = self.part_delay_ms(index);
        format!(
            "opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms",
            d = self.duration_ms,
            e = self.easing,
        )
    }
}

/// Progress of one part of a cascaded scrub.
///
/// With `spread` of 0 every part follows `progress` exactly; otherwise part
/// `index` of `count` starts `spread * index / (count - 1)` into the scrub
/// and runs for the remaining `1 - spread`.
pub fn stagger_progress(progress: f64, index: usize, count: usize, spread: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    if count <= 1 || spread <= 0.0 {
        return progress;
    }
    let spread = spread.min(1.0);
    let start = spread * index.min(count - 1) as f64 / (count - 1) as f64;
    let length = 1.0 - spread;
    if length <= f64::EPSILON {
        return if progress >= start { 1.0 } else { 0.0 };
    }
    ((progress - start) / length).clamp(0.0, 1.0)
}

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("rgb({r}, {g}, {b})")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(&self, to: &Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }
}

/// Background colour scrubbed between two colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTween {
    pub from: Rgb,
    pub to: Rgb,
}

impl ColorTween {
    pub const fn new(from: Rgb, to: Rgb) -> Self {
        Self { from, to }
    }

    pub fn at(&self, progress: f64) -> Rgb {
        self.from.lerp(&self.to, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_has_no_transform() {
        assert_eq!(Pose::IDENTITY.transform_css(), "none");
        assert_eq!(Pose::IDENTITY.opacity_css(), "1");
    }

    #[test]
    fn test_transform_css_lists_changed_components() {
        let pose = Pose::IDENTITY
            .with_y(50.0)
            .with_scale(0.5)
            .with_rotate_x(-90.0);
        assert_eq!(
            pose.transform_css(),
            "translate3d(0px, 50px, 0px) scale(0.5) rotateX(-90deg)"
        );
    }

    #[test]
    fn test_lerp_midpoint_and_clamp() {
        let from = Pose::IDENTITY.with_opacity(0.0).with_y(100.0);
        let mid = from.lerp(&Pose::IDENTITY, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 50.0);

        assert_eq!(from.lerp(&Pose::IDENTITY, 2.0), Pose::IDENTITY);
        assert_eq!(from.lerp(&Pose::IDENTITY, -1.0), from);
    }

    #[test]
    fn test_css_number_rounds_and_drops_negative_zero() {
        assert_eq!(css_number(0.123456), "0.123");
        assert_eq!(css_number(-0.0001), "0");
        assert_eq!(css_number(100.0), "100");
    }

    #[test]
    fn test_transition_includes_stagger_delay() {
        let tween = Tween::enter(Pose::IDENTITY.with_opacity(0.0))
            .duration(600)
            .delay(300)
            .stagger(30)
            .ease(Easing::Linear);
        assert_eq!(tween.part_delay_ms(2), 360);
        assert_eq!(
            tween.transition_css(2),
            "opacity 600ms linear 360ms, transform 600ms linear 360ms"
        );
    }

    #[test]
    fn test_stagger_progress_cascades_parts() {
        // first part leads, last part trails
        assert_eq!(stagger_progress(0.5, 0, 3, 0.5), 1.0);
        assert_eq!(stagger_progress(0.5, 2, 3, 0.5), 0.0);
        assert!((stagger_progress(0.5, 1, 3, 0.5) - 0.5).abs() < 1e-9);
        // everything done at the end of the scrub
        for i in 0..3 {
            assert_eq!(stagger_progress(1.0, i, 3, 0.5), 1.0);
            assert_eq!(stagger_progress(0.0, i, 3, 0.5), 0.0);
        }
    }

    #[test]
    fn test_stagger_progress_without_spread_is_identity() {
        assert_eq!(stagger_progress(0.3, 5, 10, 0.0), 0.3);
        assert_eq!(stagger_progress(0.3, 0, 1, 0.5), 0.3);
    }

    #[test]
    fn test_color_fade() {
        let fade = ColorTween::new(Rgb::BLACK, Rgb::WHITE);
        assert_eq!(fade.at(0.0), Rgb::BLACK);
        assert_eq!(fade.at(1.0), Rgb::WHITE);
        assert_eq!(fade.at(0.5).to_string(), "rgb(128, 128, 128)");
    }
}
