pub mod repair_service;

pub use repair_service::RepairService;
