pub mod generate_pixel_buffer;
pub mod ports;
pub mod value_range;
