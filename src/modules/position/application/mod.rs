pub mod domain;
pub mod ports;
pub mod position_use_cases;
pub mod services;
