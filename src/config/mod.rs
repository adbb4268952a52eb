//! all logic related to instantiating a running configuration

mod container;
mod utils;
#[cfg(test)]
mod tests;

pub use self::container::Configuration;
