mod get_position_candidates;

pub use get_position_candidates::*;
