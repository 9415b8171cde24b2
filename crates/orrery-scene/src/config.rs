use thiserror::Error;

/// Tunables for a scene.
///
/// `Default` reproduces the reference look: eight blobs spread over a short
/// depth range in front of a 200-unit focal length, three rings, and a glow
/// of radius 150.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Number of blobs (N).
    pub shape_count: usize,
    /// Silhouette samples per blob (S).
    pub segments: usize,
    /// Half-width of the depth range blobs are spread over (D).
    pub depth: f32,
    /// Unmodulated blob radius.
    pub base_size: f32,
    /// Perspective focal constant (K).
    pub focal_length: f32,
    /// Logical time added per frame.
    pub time_step: f32,
    /// Width of the symmetric range per-frame rotation rates are drawn from.
    pub rotation_spread: f32,
    /// Yaw added per frame per pixel of horizontal pointer offset from center.
    pub pointer_yaw_gain: f32,
    /// Pitch added per frame per pixel of vertical pointer offset from center.
    pub pointer_pitch_gain: f32,
    /// Number of concentric dashed rings.
    pub ring_count: usize,
    /// Segments per ring; every other one is drawn.
    pub ring_segments: usize,
    /// Radius of the pointer glow.
    pub glow_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape_count: 8,
            segments: 20,
            depth: 10.0,
            base_size: 100.0,
            focal_length: 200.0,
            time_step: 0.016,
            rotation_spread: 0.008,
            pointer_yaw_gain: 0.00005,
            pointer_pitch_gain: 0.00005,
            ring_count: 3,
            ring_segments: 40,
            glow_radius: 150.0,
        }
    }
}

/// Largest factor the breathing and morph modulations can scale `base_size` by.
const MAX_RADIUS_FACTOR: f32 = 1.2 * 1.3;

/// Reasons a [`SceneConfig`] cannot drive a scene.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("shape count must be at least 1")]
    NoShapes,

    #[error("silhouettes need at least 3 segments, got {0}")]
    TooFewSegments(usize),

    #[error("rings need at least 2 segments, got {0}")]
    TooFewRingSegments(usize),

    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("blob geometry reaches {reach:.1} units towards the viewer but the focal length is {focal}")]
    CrossesFocalPlane { reach: f32, focal: f32 },
}

impl SceneConfig {
    pub fn with_shape_count(mut self, n: usize) -> Self {
        self.shape_count = n;
        self
    }

    pub fn with_segments(mut self, s: usize) -> Self {
        self.segments = s;
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_base_size(mut self, size: f32) -> Self {
        self.base_size = size;
        self
    }

    pub fn with_focal_length(mut self, focal: f32) -> Self {
        self.focal_length = focal;
        self
    }

    pub fn with_ring_count(mut self, n: usize) -> Self {
        self.ring_count = n;
        self
    }

    /// Farthest any rotated blob point can get towards the viewer (−z), in
    /// scene units.
    pub fn max_reach(&self) -> f32 {
        let radius = self.base_size * MAX_RADIUS_FACTOR;
        let bulge = self.base_size * 1.2 * 0.2;
        self.depth + (radius * radius + bulge * bulge).sqrt()
    }

    /// Checks that the configuration can render without degenerate geometry.
    ///
    /// In particular every point must stay strictly behind the focal plane, so
    /// the perspective denominator `K + z` never approaches zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shape_count == 0 {
            return Err(ConfigError::NoShapes);
        }
        if self.segments < 3 {
            return Err(ConfigError::TooFewSegments(self.segments));
        }
        if self.ring_count > 0 && self.ring_segments < 2 {
            return Err(ConfigError::TooFewRingSegments(self.ring_segments));
        }

        for (name, value) in [
            ("base_size", self.base_size),
            ("focal_length", self.focal_length),
            ("time_step", self.time_step),
            ("glow_radius", self.glow_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        for (name, value) in [
            ("depth", self.depth),
            ("rotation_spread", self.rotation_spread),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }

        let reach = self.max_reach();
        if reach >= self.focal_length {
            return Err(ConfigError::CrossesFocalPlane { reach, focal: self.focal_length });
        }

        Ok(())
    }
}
