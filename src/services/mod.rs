pub mod pricing;
pub mod continuity;
pub mod selection;
pub mod lifecycle;
pub mod session;
