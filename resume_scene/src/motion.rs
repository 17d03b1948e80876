//! Small easing helpers shared by the camera and the reveal cube.

/// One exponential-smoothing step: moves `current` a fraction `factor` of the
/// way to `target`. With `0 < factor < 1` the remaining distance shrinks every call.
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Sinusoidal idle offset.
pub fn bob_offset(elapsed_secs: f32, speed: f32, amplitude: f32) -> f32 {
    (elapsed_secs * speed).sin() * amplitude
}
