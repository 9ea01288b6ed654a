pub mod stages;

pub use stages::generate_stage_routes;
