pub mod template;
pub mod vendor;
