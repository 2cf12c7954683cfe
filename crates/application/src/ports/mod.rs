mod customer_repository;
mod job_log;
mod order_repository;
mod product_repository;
mod store_health_port;

pub use customer_repository::CustomerRepository;
pub use job_log::JobLog;
pub use order_repository::{OrderRepository, OrderTotals};
pub use product_repository::ProductRepository;
pub use store_health_port::StoreHealthPort;
