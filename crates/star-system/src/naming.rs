//! Designations for stars, hosts, planets and asteroids.

use crate::body::BodyId;

/// Component letter for the `index`-th star ("A", "B", ...)
pub fn star_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Star name; a lone star takes the bare catalog name
pub fn star_name(catalog: &str, index: usize, star_count: usize) -> String {
    if star_count <= 1 {
        catalog.to_string()
    } else {
        format!("{} {}", catalog, star_letter(index))
    }
}

/// Host prefix for planet names
///
/// Joins the component letters of the host's stars, so a circumbinary
/// host around A and B is "KV-4729 AB".
pub fn host_name(catalog: &str, host_stars: &[BodyId], star_order: &[BodyId]) -> String {
    if star_order.len() <= 1 {
        return catalog.to_string();
    }
    let mut indices: Vec<usize> = host_stars
        .iter()
        .filter_map(|id| star_order.iter().position(|s| s == id))
        .collect();
    indices.sort_unstable();
    let letters: String = indices.into_iter().map(star_letter).collect();
    format!("{} {}", catalog, letters)
}

/// Planet letter for the `index`-th planet of a host ("b", "c", ...)
pub fn planet_letter(index: usize) -> char {
    (b'b' + (index % 25) as u8) as char
}

pub fn planet_name(host_name: &str, index: usize) -> String {
    format!("{} {}", host_name, planet_letter(index))
}

/// Asteroid name: catalog, 1-based belt number, 1-based rank by size
pub fn asteroid_name(catalog: &str, belt_index: usize, rank: usize) -> String {
    format!("{} {}-{}", catalog, belt_index + 1, rank + 1)
}
