pub mod service;

pub use service::HealthCheckService;
