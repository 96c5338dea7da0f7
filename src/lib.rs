pub mod camera;
pub mod errors;
pub mod geometry;
pub mod integrator;
pub mod math;
pub mod output;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod scene;
