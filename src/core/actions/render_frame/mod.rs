pub mod render_frame;
pub mod render_path_frame;
