pub mod navigation;
pub mod timer;
