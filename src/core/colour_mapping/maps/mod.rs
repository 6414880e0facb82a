pub mod fire_gradient;
pub mod linear_gradient;
