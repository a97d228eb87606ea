pub mod audio;
pub mod observability;
pub mod persistence;
pub mod speech;
pub mod translation;
