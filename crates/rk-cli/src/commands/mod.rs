pub mod pool;
pub mod roll;
pub mod roller;
pub mod sheet;
