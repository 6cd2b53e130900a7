pub mod provider;
pub mod transport;
