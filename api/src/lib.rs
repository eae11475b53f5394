pub mod coords;
pub mod geocode;
pub mod ipgeo;
