use sim::config::{ConfigError,Interval};

/// Linear congruential generator driving all inter-event intervals.
///
/// Reproducibility is the point: two generators built with the same
/// parameters yield bit-identical sequences, so different server counts
/// can be compared against the same traffic. Statistical quality is not
/// a goal.
pub struct Lcg {
    multiplier: u64,
    increment: u64,
    modulus: u64,
    state: u64,
    draws: u64,
}

impl Lcg {
    pub fn new (multiplier: u64, increment: u64, modulus: u64, seed: u64) -> Result<Lcg,ConfigError> {
        if modulus == 0 {
            return Err(ConfigError::ZeroModulus);
        }
        Ok(Lcg {
            multiplier,
            increment,
            modulus,
            state: seed % modulus,
            draws: 0,
        })
    }

    /// Next value in [0,1). The recurrence is computed in u128 so that
    /// multiplier*state never wraps, whatever the modulus.
    pub fn draw (&mut self) -> f64 {
        let next = (self.multiplier as u128 * self.state as u128 + self.increment as u128)
            % self.modulus as u128;
        self.state = next as u64;
        self.draws += 1;
        self.state as f64 / self.modulus as f64
    }

    /// Uniform sample in [low, high). A non-finite result means the
    /// caller should skip scheduling that one event, never abort the run.
    pub fn uniform (&mut self, interval: &Interval) -> Option<f64> {
        let v = interval.low + (interval.high - interval.low) * self.draw();
        if v.is_finite() {
            Some(v)
        }
        else {
            None
        }
    }

    pub fn draws_used (&self) -> u64 {
        self.draws
    }
}
