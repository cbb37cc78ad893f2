pub mod error;
pub mod color;
pub mod shape;
pub mod velocity;
pub mod group;
pub mod snapshot;
pub mod scene;
pub mod catalog;
