#![doc = include_str!("../README.MD")]
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod ktx1;
pub mod loader;
pub mod loader_factory;

// Re-export the KTX v1 factory for convenient access
pub use loader_factory::Ktx1LoaderFactory;
