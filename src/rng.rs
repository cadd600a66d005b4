/// Injectable random source. The animator only ever needs uniform
/// doubles in [0, 1), so everything else is derived here.
pub trait Sampler {
    fn next_f64(&mut self) -> f64;

    /// Uniform in [min, max).
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// Independent Bernoulli trial.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// Seedable linear congruential generator. Deterministic, which is the
/// point: tests seed it and replay identical star fields.
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x5EED_5EED } else { seed },
        }
    }

    /// Production seeding: one `Math.random` call at startup, then
    /// everything runs wasm-native (no JS interop per sample).
    pub fn from_entropy() -> Self {
        Self::new((js_sys::Math::random() * u32::MAX as f64) as u32)
    }
}

impl Sampler for Lcg {
    fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let value = (self.state >> 8) as f64;
        value / ((u32::MAX >> 8) as f64 + 1.0)
    }
}
