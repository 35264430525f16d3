/// Seeded random stippler for the "Your Model" panel
pub mod stipple;

pub use stipple::Stippler;
