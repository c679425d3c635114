// Per-tick systems run by the World in a fixed order.

pub mod collisions;
pub mod movement;
