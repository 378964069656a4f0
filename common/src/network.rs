pub mod address;
pub mod cidr;
pub mod range;
pub mod scan;
pub mod set;
pub mod target;
