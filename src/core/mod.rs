pub mod activity;
pub mod energy;
pub mod mode;
pub mod seed;
pub mod session;
pub mod status;
