use std::fmt;

//First arrival is deliberately offset from t=0 so the run does not open
//on a degenerate transition
pub const DEFAULT_FIRST_ARRIVAL: f64 = 2.0;
pub const DEFAULT_MAX_EVENTS: u64 = 100_000;

/// Bounds for a uniformly drawn inter-event interval.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub fn new (low: f64, high: f64) -> Interval {
        Interval { low, high }
    }

    fn check (&self, name: &'static str) -> Result<(),ConfigError> {
        if !self.low.is_finite() || !self.high.is_finite()
            || self.low < 0. || self.low >= self.high {
            Err(ConfigError::BadInterval(name, self.low, self.high))
        }
        else {
            Ok(())
        }
    }
}

#[derive(Debug,PartialEq)]
pub enum ConfigError {
    ZeroCapacity,
    ZeroServers,
    ZeroModulus,
    ZeroEventCeiling,
    BadInterval(&'static str, f64, f64),
    BadFirstArrival(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigError::ZeroCapacity =>
                write!(f, "system capacity must be at least 1"),
            ConfigError::ZeroServers =>
                write!(f, "server count must be at least 1"),
            ConfigError::ZeroModulus =>
                write!(f, "generator modulus must be positive"),
            ConfigError::ZeroEventCeiling =>
                write!(f, "event ceiling must be at least 1"),
            ConfigError::BadInterval(name, low, high) =>
                write!(f, "{} interval [{};{}) must satisfy 0 <= low < high", name, low, high),
            ConfigError::BadFirstArrival(t) =>
                write!(f, "first arrival time {} must be finite and non-negative", t),
        }
    }
}

/// Full configuration of one simulation run. Passed by value at
/// construction, never read from process-wide state.
#[derive(Clone,Copy,Debug)]
pub struct SimConfig {
    /// Maximum clients in the system, waiting and in service combined.
    pub capacity: usize,
    /// Number of parallel servers.
    pub servers: usize,
    /// Inter-arrival interval bounds.
    pub arrival: Interval,
    /// Service interval bounds.
    pub service: Interval,
    /// Timestamp of the seeded first arrival.
    pub first_arrival: f64,
    /// Safety bound on processed events, not a correctness mechanism.
    pub max_events: u64,
}

impl SimConfig {
    pub fn new (capacity: usize, servers: usize, arrival: Interval, service: Interval) -> SimConfig {
        SimConfig {
            capacity,
            servers,
            arrival,
            service,
            first_arrival: DEFAULT_FIRST_ARRIVAL,
            max_events: DEFAULT_MAX_EVENTS,
        }
    }

    pub fn validate (&self) -> Result<(),ConfigError> {
        if self.capacity < 1 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.servers < 1 {
            return Err(ConfigError::ZeroServers);
        }
        if self.max_events < 1 {
            return Err(ConfigError::ZeroEventCeiling);
        }
        self.arrival.check("arrival")?;
        self.service.check("service")?;
        if !self.first_arrival.is_finite() || self.first_arrival < 0. {
            return Err(ConfigError::BadFirstArrival(self.first_arrival));
        }
        Ok(())
    }
}
