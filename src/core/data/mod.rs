pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod grid;
pub mod iteration_field;
pub mod path_overlay;
pub mod pixel_buffer;
pub mod render_params;
pub mod viewport;
