pub mod carousel;
pub mod config;
pub mod content;
pub mod events;
pub mod storage;
pub mod theme;
pub mod tilt;
pub mod viewport;
