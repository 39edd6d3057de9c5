//! Benchmark support utilities for the greedy planner.
//!
//! Provides deterministic multi-depot requests with deliveries scattered
//! around their depots for reproducible benchmarks.

use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use waybill_core::{Delivery, DistributionCenter, PlanRequest, Vehicle, lat_lon};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Depot locations: Belém, Recife, Brasília, São Paulo and Florianópolis.
const DEPOTS: [(&str, f64, f64); 5] = [
    ("Belém", -1.4557, -48.4902),
    ("Recife", -8.05428, -34.8813),
    ("Brasília", -15.7975, -47.8919),
    ("São Paulo", -23.5505, -46.6333),
    ("Florianópolis", -27.5954, -48.548),
];

/// Vehicles per depot.
const FLEET_SIZE: u64 = 4;

/// Maximum offset of a destination from its seed depot (in degrees).
const SPREAD: f64 = 4.0;

/// Generate a request with `count` deliveries spread across all depots.
///
/// Deliveries are seeded round-robin around the depots so each depot has work
/// to do, with random weights and deadlines drawn from a seeded RNG.
#[must_use]
pub fn generate_request(count: usize, seed: u64) -> PlanRequest {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let depots = build_depots();
    let deliveries = (0..count)
        .zip(1_u64..)
        .filter_map(|(i, id)| {
            #[expect(
                clippy::integer_division_remainder_used,
                reason = "Modulo for cyclic depot assignment is intentional"
            )]
            let anchor = depots.get(i % depots.len())?.location();
            let offset: Coord<f64> = Coord {
                x: rng.gen_range(-SPREAD..SPREAD),
                y: rng.gen_range(-SPREAD..SPREAD),
            };
            #[expect(clippy::float_arithmetic, reason = "Required for coordinate offset")]
            let destination = Coord {
                x: anchor.x + offset.x,
                y: anchor.y + offset.y,
            };
            let weight = rng.gen_range(10.0..400.0);
            let deadline = rng.gen_range(1..=7);
            Delivery::new(id, destination, format!("Destination {id}"), weight, deadline).ok()
        })
        .collect();
    PlanRequest { depots, deliveries }
}

fn build_depots() -> Vec<DistributionCenter> {
    DEPOTS
        .iter()
        .zip(0_u64..)
        .filter_map(|(&(name, lat, lon), idx)| {
            let mut depot = DistributionCenter::new(idx + 1, name, lat_lon(lat, lon)).ok()?;
            for slot in 1..=FLEET_SIZE {
                let vehicle = Vehicle::new(idx * FLEET_SIZE + slot, 1000.0, 60.0, 8.0).ok()?;
                depot.add_vehicle(vehicle);
            }
            Some(depot)
        })
        .collect()
}
