pub mod assemble;
pub mod controller;
pub mod errors;
pub mod frame_pool;
pub mod scenarios;
