pub mod map_viewport;
