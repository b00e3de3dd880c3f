//! Simulated direction predictor and its track record.

pub struct PredictionRecordConfig {
    /// Chance the previous call is scored as correct
    pub correct_probability: f64,
    /// Chance the running accuracy moves on a given tick
    pub drift_probability: f64,
    pub initial_accuracy: f64,
    pub accuracy_bounds: (f64, f64),
    pub drift_large: f64,
    pub drift_small: f64,
}

pub struct PredictionConfig {
    /// Radians per second-of-minute for the fast oscillation
    pub oscillation_rate: f64,
    pub base_confidence: f64,
    pub confidence_amplitude: f64,
    pub confidence_bounds: (f64, f64),
    /// Confidence strictly above this is a strong signal
    pub strong_threshold: f64,
    pub record: PredictionRecordConfig,
}

pub const PREDICTION: PredictionConfig = PredictionConfig {
    oscillation_rate: 0.1,
    base_confidence: 65.0,
    confidence_amplitude: 30.0,
    confidence_bounds: (50.0, 95.0),
    strong_threshold: 80.0,
    record: PredictionRecordConfig {
        correct_probability: 0.7,
        drift_probability: 0.1,
        initial_accuracy: 78.0,
        accuracy_bounds: (65.0, 92.0),
        drift_large: 0.5,
        drift_small: 0.3,
    },
};
