pub mod frame;
pub mod ports;
pub mod sequencer;
