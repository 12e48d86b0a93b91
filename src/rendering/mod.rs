pub mod camera;
pub mod field;
