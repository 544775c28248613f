use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyframeError {
    #[error("keyframes need at least two control points, got {0}")]
    TooFew(usize),
    #[error("input has {input} points but output has {output}")]
    LengthMismatch { input: usize, output: usize },
    #[error("keyframe values must be finite")]
    NotFinite,
    #[error("keyframe input must be non-decreasing")]
    Unordered,
}

/// Piecewise-linear mapping from scroll progress to a presentational value.
///
/// Inputs outside the first/last control point are clamped, so the output
/// always stays inside the range spanned by the control points.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Keyframes {
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> Result<Self, KeyframeError> {
        if input.len() != output.len() {
            return Err(KeyframeError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(KeyframeError::TooFew(input.len()));
        }
        if input.iter().chain(output.iter()).any(|v| !v.is_finite()) {
            return Err(KeyframeError::NotFinite);
        }
        if input.windows(2).any(|w| w[1] < w[0]) {
            return Err(KeyframeError::Unordered);
        }
        Ok(Self { input, output })
    }

    pub fn sample(&self, progress: f64) -> f64 {
        let first = self.input[0];
        let last = self.input[self.input.len() - 1];
        if progress.is_nan() || progress <= first {
            return self.output[0];
        }
        if progress >= last {
            return self.output[self.output.len() - 1];
        }
        // first segment whose right edge reaches `progress`
        let seg = self
            .input
            .windows(2)
            .position(|w| progress <= w[1])
            .unwrap_or(self.input.len() - 2);
        let (x0, x1) = (self.input[seg], self.input[seg + 1]);
        let (y0, y1) = (self.output[seg], self.output[seg + 1]);
        if x1 == x0 {
            return y1;
        }
        let t = (progress - x0) / (x1 - x0);
        y0 + (y1 - y0) * t
    }
}

/// Which part of an element's journey through the viewport maps onto 0..1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRange {
    /// 0 when the element's top meets the viewport bottom, 1 when its bottom
    /// leaves through the viewport top.
    EntryToExit,
    /// 0 when the element's top meets the viewport top, 1 when its bottom
    /// leaves through the viewport top.
    PinnedToExit,
}

impl ScrollRange {
    /// `top` is the element's bounding-rect top relative to the viewport.
    pub fn progress(self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let (travelled, distance) = match self {
            ScrollRange::EntryToExit => (viewport_height - top, viewport_height + height),
            ScrollRange::PinnedToExit => (-top, height),
        };
        if distance <= 0.0 {
            return if travelled > 0.0 { 1.0 } else { 0.0 };
        }
        (travelled / distance).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Percent,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
        }
    }
}

/// A set of channels driven by one progress value.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionPreset {
    pub range: ScrollRange,
    pub opacity: Option<Keyframes>,
    pub translate_y: Option<(Keyframes, Unit)>,
    pub scale: Option<Keyframes>,
}

const EDGES: [f64; 4] = [0.0, 0.2, 0.8, 1.0];

fn edges(values: [f64; 4]) -> Keyframes {
    Keyframes {
        input: EDGES.to_vec(),
        output: values.to_vec(),
    }
}

fn span(from: f64, to: f64) -> Keyframes {
    Keyframes {
        input: vec![0.0, 1.0],
        output: vec![from, to],
    }
}

impl MotionPreset {
    /// Fade in over the first fifth, hold, fade out over the last fifth.
    pub fn fade() -> Self {
        Self {
            range: ScrollRange::EntryToExit,
            opacity: Some(edges([0.0, 1.0, 1.0, 0.0])),
            translate_y: None,
            scale: None,
        }
    }

    pub fn fade_rise() -> Self {
        Self {
            translate_y: Some((edges([100.0, 0.0, 0.0, 100.0]), Unit::Px)),
            ..Self::fade()
        }
    }

    pub fn fade_zoom() -> Self {
        Self {
            scale: Some(edges([0.8, 1.0, 1.0, 0.8])),
            ..Self::fade()
        }
    }

    /// Fading parallax layer drifting between two percentage offsets.
    pub fn parallax(from: f64, to: f64) -> Self {
        Self {
            translate_y: Some((span(from, to), Unit::Percent)),
            ..Self::fade()
        }
    }

    /// Hero content sinks and fades as the hero scrolls away.
    pub fn hero() -> Self {
        Self {
            range: ScrollRange::PinnedToExit,
            opacity: Some(Keyframes {
                input: vec![0.0, 0.5],
                output: vec![1.0, 0.0],
            }),
            translate_y: Some((span(0.0, 40.0), Unit::Percent)),
            scale: None,
        }
    }

    pub fn style(&self, progress: f64) -> String {
        let mut decls = Vec::with_capacity(2);
        if let Some(opacity) = &self.opacity {
            decls.push(format!("opacity: {:.3}", opacity.sample(progress)));
        }
        let mut transforms = Vec::with_capacity(2);
        if let Some((y, unit)) = &self.translate_y {
            transforms.push(format!("translateY({:.2}{})", y.sample(progress), unit.suffix()));
        }
        if let Some(scale) = &self.scale {
            transforms.push(format!("scale({:.3})", scale.sample(progress)));
        }
        if !transforms.is_empty() {
            decls.push(format!("transform: {}", transforms.join(" ")));
        }
        decls.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fade_edges() {
        let k = Keyframes::new(EDGES.to_vec(), vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert!(close(k.sample(0.0), 0.0));
        assert!(close(k.sample(0.1), 0.5));
        assert!(close(k.sample(0.2), 1.0));
        assert!(close(k.sample(0.5), 1.0));
        assert!(close(k.sample(0.9), 0.5));
        assert!(close(k.sample(1.0), 0.0));
    }

    #[test]
    fn test_clamped_outside_domain() {
        let k = Keyframes::new(vec![0.0, 0.5], vec![1.0, 0.0]).unwrap();
        assert!(close(k.sample(-3.0), 1.0));
        assert!(close(k.sample(0.75), 0.0));
        assert!(close(k.sample(f64::NAN), 1.0));
    }

    #[test]
    fn test_continuous_at_control_points() {
        let k = Keyframes::new(EDGES.to_vec(), vec![100.0, 0.0, 0.0, 100.0]).unwrap();
        for x in EDGES {
            let eps = 1e-7;
            let left = k.sample((x - eps).max(0.0));
            let right = k.sample((x + eps).min(1.0));
            assert!((left - right).abs() < 1e-3, "jump at {x}");
        }
    }

    #[test]
    fn test_repeated_sampling_is_stable() {
        let k = Keyframes::new(EDGES.to_vec(), vec![0.8, 1.0, 1.0, 0.8]).unwrap();
        let first = k.sample(0.13);
        for _ in 0..10_000 {
            assert_eq!(k.sample(0.13), first);
        }
    }

    #[test]
    fn test_zero_width_segment_steps() {
        let k = Keyframes::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 0.0, 1.0, 1.0]).unwrap();
        assert!(close(k.sample(0.5), 0.0));
        assert!(close(k.sample(0.75), 1.0));
    }

    #[test]
    fn test_invalid_keyframes() {
        assert_eq!(
            Keyframes::new(vec![0.0], vec![1.0]),
            Err(KeyframeError::TooFew(1))
        );
        assert_eq!(
            Keyframes::new(vec![0.0, 1.0], vec![1.0]),
            Err(KeyframeError::LengthMismatch { input: 2, output: 1 })
        );
        assert_eq!(
            Keyframes::new(vec![0.0, f64::INFINITY], vec![1.0, 0.0]),
            Err(KeyframeError::NotFinite)
        );
        assert_eq!(
            Keyframes::new(vec![0.5, 0.2], vec![1.0, 0.0]),
            Err(KeyframeError::Unordered)
        );
    }

    #[test]
    fn test_entry_to_exit_progress() {
        let r = ScrollRange::EntryToExit;
        // element 600 tall in an 800 viewport
        assert!(close(r.progress(800.0, 600.0, 800.0), 0.0));
        assert!(close(r.progress(100.0, 600.0, 800.0), 0.5));
        assert!(close(r.progress(-600.0, 600.0, 800.0), 1.0));
        assert!(close(r.progress(2000.0, 600.0, 800.0), 0.0));
        assert!(close(r.progress(-5000.0, 600.0, 800.0), 1.0));
    }

    #[test]
    fn test_pinned_to_exit_progress() {
        let r = ScrollRange::PinnedToExit;
        assert!(close(r.progress(0.0, 900.0, 800.0), 0.0));
        assert!(close(r.progress(-450.0, 900.0, 800.0), 0.5));
        assert!(close(r.progress(-900.0, 900.0, 800.0), 1.0));
        assert!(close(r.progress(-10.0, 0.0, 800.0), 1.0));
    }

    #[test]
    fn test_preset_style() {
        assert_eq!(
            MotionPreset::fade_rise().style(0.5),
            "opacity: 1.000; transform: translateY(0.00px)"
        );
        assert_eq!(
            MotionPreset::fade_zoom().style(0.0),
            "opacity: 0.000; transform: scale(0.800)"
        );
        assert_eq!(
            MotionPreset::hero().style(0.25),
            "opacity: 0.500; transform: translateY(10.00%)"
        );
        assert_eq!(MotionPreset::fade().style(1.0), "opacity: 0.000");
    }
}
