//! Synthetic series shapes.

/// Shape of one synthetic series: a sine seed plus noise, then a bounded random walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformConfig {
    /// Centre of the seed wave. Also the value stepped from when a series is empty.
    pub base: f64,
    pub amplitude: f64,
    /// Radians per point
    pub phase_step: f64,
    /// Points the wave is shifted by (a positive offset leads the index wave)
    pub phase_offset: f64,
    /// Total width of the seed noise band (value +/- seed_noise / 2)
    pub seed_noise: f64,
    /// Total width of one random walk step (value +/- walk_step / 2)
    pub walk_step: f64,
    /// Hard clamp applied to every generated value
    pub bounds: Option<(f64, f64)>,
}

impl WaveformConfig {
    pub fn clamp(&self, value: f64) -> f64 {
        match self.bounds {
            Some((lo, hi)) => value.clamp(lo, hi),
            None => value,
        }
    }
}

pub struct GeneratorConfig {
    pub index: WaveformConfig,
    pub probability: WaveformConfig,
}

pub const GENERATOR: GeneratorConfig = GeneratorConfig {
    index: WaveformConfig {
        base: 22_000.0,
        amplitude: 50.0,
        phase_step: 0.1,
        phase_offset: 0.0,
        seed_noise: 10.0,
        walk_step: 5.0, // +/- 2.5 points per tick
        bounds: None,
    },
    probability: WaveformConfig {
        base: 50.0,
        amplitude: 30.0,
        phase_step: 0.1,
        phase_offset: 5.0,
        seed_noise: 0.0,
        walk_step: 3.0, // +/- 1.5 per tick
        bounds: Some((0.0, 100.0)),
    },
};
