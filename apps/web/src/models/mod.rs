pub mod company;
pub mod dropdown;
pub mod job;
