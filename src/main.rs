#![allow(dead_code)]

mod sim;
pub mod float_binaryheap;

use sim::config::{Interval,SimConfig};
use sim::lcg::Lcg;
use sim::simulation::Simulation;

fn print_report (sim: &Simulation) {
    println!("Global time: {:.2}", sim.total_time());
    println!("Lost clients: {}", sim.losses());
    println!("Probability distribution:");
    let probabilities = sim.occupancy_distribution();
    for (state, time) in sim.state_time().iter().enumerate() {
        println!("State {}: time = {:.2}, prob = {:.6}",
                 state, time, probabilities[state] * 100.);
    }
}

fn run_scenario (servers: usize) {
    println!("---- Simulation G/G/{}/5 ----", servers);

    //Each scenario gets a fresh generator so both server counts face the
    //exact same traffic
    let rng = Lcg::new(1_664_525, 1_013_904_223, 1 << 32, 5)
        .expect("generator parameters are valid");
    let config = SimConfig::new(5, servers, Interval::new(2., 5.), Interval::new(3., 5.));
    let mut sim = Simulation::new(config, rng)
        .expect("simulation configuration is valid");

    sim.run();
    print_report(&sim);
}

fn main() {
    run_scenario(1);
    run_scenario(2);
}
