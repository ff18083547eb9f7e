// Typed views of the upstream organization records

pub mod organization;
pub mod transformed_organization;

pub use organization::*;
pub use transformed_organization::*;
