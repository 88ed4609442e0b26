pub mod applications;
pub mod interview_flows;
pub mod interview_steps;
pub mod interviews;
pub mod positions;
