// Internal support shared by the codec modules

pub mod error;
