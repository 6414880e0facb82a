pub mod animation_writer;
