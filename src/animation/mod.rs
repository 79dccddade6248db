//! Frame counter and the fixed-cadence timer that advances it.

pub mod clock;
