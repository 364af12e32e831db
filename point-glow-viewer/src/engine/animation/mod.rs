pub mod clock;
pub mod ease;
pub mod fly_in;
pub mod keyframes;
pub mod segments;
