pub mod frame_files;
