pub mod collision;
pub mod nebula;
pub mod parallel;
pub mod render;
pub mod singularity;
