//! Generate one star system and print its layout
//!
//! Usage: cargo run -p star-system --example generate_system [SEED]
//!
//! Prints the summary, then every orbit host with its planets and belts.

use star_system::{StarSystem, SystemSpec};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let system = match StarSystem::from_spec(&SystemSpec::new(seed)) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("generation failed: {err}");
            std::process::exit(1);
        }
    };

    print!("{}", system.summary());
    println!("{}", "=".repeat(60));

    for host in &system.hosts {
        println!(
            "{} host {}: {:.3} M☉, stable {:.3}-{:.1} AU, HZ {:.2}-{:.2} AU",
            host.kind,
            host.node,
            host.mass,
            host.inner_stability_au,
            host.outer_stability_au,
            host.hz_inner_au,
            host.hz_outer_au,
        );

        for id in system.planets_of(host.node) {
            let (Some(body), Some(planet)) = (system.body(id), system.planet(id)) else {
                continue;
            };
            println!(
                "  {:<24} {:>8.3} AU  {:>9.2} M⊕  {}  moons: {}",
                body.name,
                planet.semi_major_axis_au,
                planet.mass_earth,
                planet.class,
                system.moons_of(id).len(),
            );
        }

        for belt in system.belts_for(host.node) {
            println!(
                "  {} belt {:.2}-{:.2} AU ({} asteroids)",
                belt.region,
                belt.inner_radius_au,
                belt.outer_radius_au,
                belt.asteroid_ids.len(),
            );
        }
    }
}
