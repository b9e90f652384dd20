use sim::config::{ConfigError,SimConfig};
use sim::event::{EventKind,EventQueue};
use sim::lcg::Lcg;

/// One G/G/c/K simulation run: the event loop, the occupancy bookkeeping
/// and the arrival/departure transition rules.
///
/// Time spent with exactly `i` clients in the system accumulates in
/// `state_time[i]`, so `sum(state_time) == clock` holds after every
/// processed event.
pub struct Simulation {
    config: SimConfig,
    rng: Lcg,
    events: EventQueue,
    clock: f64,
    clients: usize,
    busy_servers: usize,
    state_time: Vec<f64>,
    losses: u64,
    events_processed: u64,
}

impl Simulation {
    pub fn new (config: SimConfig, rng: Lcg) -> Result<Simulation,ConfigError> {
        config.validate()?;
        Ok(Simulation {
            state_time: vec![0.; config.capacity + 1],
            config,
            rng,
            events: EventQueue::new(),
            clock: 0.,
            clients: 0,
            busy_servers: 0,
            losses: 0,
            events_processed: 0,
        })
    }

    /// Seeds the queue with the initial arrival.
    pub fn start (&mut self) {
        self.events.schedule(self.config.first_arrival, EventKind::Arrival);
    }

    /// Processes the earliest pending event. Returns false once the queue
    /// is drained or the event ceiling is reached.
    pub fn step (&mut self) -> bool {
        if self.events_processed >= self.config.max_events {
            return false;
        }
        let (time, kind) = match self.events.next_event() {
            None => return false,
            Some(e) => e,
        };

        self.advance_to(time);
        match kind {
            EventKind::Arrival => self.arrival(),
            EventKind::Departure => self.departure(),
        }
        self.events_processed += 1;
        true
    }

    /// Runs the whole simulation: one seeded arrival, then events in time
    /// order until exhaustion or the ceiling.
    pub fn run (&mut self) {
        self.start();
        while self.step() {}
    }

    //Accrues elapsed time into the state that was in effect over
    //[clock, time) *before* the transition mutates `clients`. An event
    //behind the clock is a scheduling anomaly and advances nothing.
    fn advance_to (&mut self, time: f64) {
        let dt = time - self.clock;
        if dt > 0. {
            self.state_time[self.clients] += dt;
            self.clock = time;
        }
    }

    fn arrival (&mut self) {
        //Next arrival first, so the stream keeps flowing whatever happens
        //to this client. A failed sample skips that one arrival.
        if let Some(gap) = self.rng.uniform(&self.config.arrival) {
            self.events.schedule(self.clock + gap, EventKind::Arrival);
        }

        if self.clients < self.config.capacity {
            self.clients += 1;
            self.assign_servers();
        }
        else {
            self.losses += 1;
        }
    }

    fn departure (&mut self) {
        self.clients -= 1;
        self.busy_servers -= 1;
        self.assign_servers();
    }

    //Pulls waiting clients into free service capacity. A server is only
    //claimed once its departure has actually been scheduled, so a failed
    //service sample cannot strand a phantom busy server.
    fn assign_servers (&mut self) {
        while self.busy_servers < self.config.servers && self.busy_servers < self.clients {
            match self.rng.uniform(&self.config.service) {
                Some(gap) => {
                    self.busy_servers += 1;
                    self.events.schedule(self.clock + gap, EventKind::Departure);
                },
                None => break,
            }
        }
    }

    pub fn total_time (&self) -> f64 {
        self.clock
    }

    pub fn clients (&self) -> usize {
        self.clients
    }

    pub fn busy_servers (&self) -> usize {
        self.busy_servers
    }

    pub fn losses (&self) -> u64 {
        self.losses
    }

    pub fn state_time (&self) -> &[f64] {
        &self.state_time
    }

    pub fn events_processed (&self) -> u64 {
        self.events_processed
    }

    pub fn pending_events (&self) -> usize {
        self.events.len()
    }

    pub fn draws_used (&self) -> u64 {
        self.rng.draws_used()
    }

    /// Per-state occupancy probabilities, `state_time[i] / sum(state_time)`.
    /// Read-only: calling it never perturbs the terminal state.
    pub fn occupancy_distribution (&self) -> Vec<f64> {
        let total: f64 = self.state_time.iter().sum();
        self.state_time.iter().map(|t| t / total).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Simulation;
    use sim::config::{Interval,SimConfig};
    use sim::lcg::Lcg;

    const A: u64 = 1_664_525;
    const C: u64 = 1_013_904_223;
    const M: u64 = 1 << 32;
    const SEED: u64 = 5;

    fn rng() -> Lcg {
        Lcg::new(A, C, M, SEED).unwrap()
    }

    fn gg_c_5_config(servers: usize) -> SimConfig {
        SimConfig::new(5, servers, Interval::new(2., 5.), Interval::new(3., 5.))
    }

    fn gg_c_5(servers: usize) -> Simulation {
        Simulation::new(gg_c_5_config(servers), rng()).unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.),
                "{} != {}", a, b);
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let mut config = gg_c_5_config(1);
        config.capacity = 0;
        assert!(Simulation::new(config, rng()).is_err());
    }

    #[test]
    fn first_event_admits_and_schedules_two_events() {
        let mut sim = gg_c_5(1);
        sim.start();
        assert!(sim.step());

        // the seeded arrival at t=2.0: one client admitted, one server
        // claimed, next arrival and its departure both pending
        assert_eq!(sim.total_time(), 2.0);
        assert_eq!(sim.clients(), 1);
        assert_eq!(sim.busy_servers(), 1);
        assert_eq!(sim.pending_events(), 2);
        assert_eq!(sim.events_processed(), 1);
        assert_eq!(sim.draws_used(), 2);
    }

    #[test]
    fn invariants_hold_after_every_event() {
        let mut config = gg_c_5_config(2);
        config.max_events = 5_000;
        let mut sim = Simulation::new(config, rng()).unwrap();
        sim.start();

        let mut last_clock = 0.;
        let mut steps = 0u64;
        while sim.step() {
            steps += 1;
            assert_eq!(sim.events_processed(), steps);
            assert!(sim.total_time() >= last_clock);
            last_clock = sim.total_time();

            assert!(sim.clients() <= 5);
            assert!(sim.busy_servers() <= 2);
            assert!(sim.busy_servers() <= sim.clients());

            let accounted: f64 = sim.state_time().iter().sum();
            assert_close(accounted, sim.total_time());
        }
        assert_eq!(steps, 5_000);
    }

    #[test]
    fn identical_runs_are_bit_identical() {
        let mut sim1 = gg_c_5(1);
        let mut sim2 = gg_c_5(1);
        sim1.run();
        sim2.run();

        assert_eq!(sim1.total_time(), sim2.total_time());
        assert_eq!(sim1.losses(), sim2.losses());
        assert_eq!(sim1.state_time(), sim2.state_time());
        assert_eq!(sim1.draws_used(), sim2.draws_used());
    }

    #[test]
    fn event_ceiling_bounds_the_run() {
        let mut config = gg_c_5_config(1);
        config.max_events = 10;
        let mut sim = Simulation::new(config, rng()).unwrap();
        sim.run();
        assert_eq!(sim.events_processed(), 10);
    }

    #[test]
    fn more_servers_never_lose_more() {
        let mut single = gg_c_5(1);
        let mut double = gg_c_5(2);
        single.run();
        double.run();
        assert!(double.losses() <= single.losses());
    }

    #[test]
    fn saturated_system_counts_losses() {
        // arrivals far faster than service on a tiny system
        let mut config = SimConfig::new(2, 1, Interval::new(0.1, 0.2), Interval::new(3., 5.));
        config.max_events = 1_000;
        let mut sim = Simulation::new(config, rng()).unwrap();
        sim.start();

        while sim.step() {
            assert!(sim.clients() <= 2);
        }
        assert!(sim.losses() > 0);
    }

    #[test]
    fn time_is_fully_partitioned_across_states() {
        let mut sim = gg_c_5(1);
        sim.run();

        let accounted: f64 = sim.state_time().iter().sum();
        assert_close(accounted, sim.total_time());

        let probabilities = sim.occupancy_distribution();
        let total: f64 = probabilities.iter().sum();
        assert_close(total, 1.);
    }

    #[test]
    fn reporting_is_idempotent() {
        let mut sim = gg_c_5(2);
        sim.run();

        let first = sim.occupancy_distribution();
        let losses = sim.losses();
        let clock = sim.total_time();

        assert_eq!(first, sim.occupancy_distribution());
        assert_eq!(losses, sim.losses());
        assert_eq!(clock, sim.total_time());
    }

    #[test]
    fn stale_event_is_a_noop_advance() {
        let mut sim = gg_c_5(1);
        sim.advance_to(5.0);
        sim.advance_to(3.0);

        assert_eq!(sim.total_time(), 5.0);
        let accounted: f64 = sim.state_time().iter().sum();
        assert_close(accounted, 5.0);
    }
}
