pub mod length;
pub mod mass;


pub use length::{AU_KM, Length, SOLAR_RADIUS_AU};
pub use mass::{EARTH_MASSES_PER_SOLAR, Mass};
