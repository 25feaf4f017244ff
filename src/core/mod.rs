pub mod ballistics;
pub mod window;
