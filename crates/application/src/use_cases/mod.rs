pub mod customers;
pub mod health;
pub mod orders;
pub mod products;
pub mod reports;

// Re-export use cases
pub use customers::CleanupInactiveCustomersUseCase;
pub use health::HeartbeatUseCase;
pub use orders::SendOrderRemindersUseCase;
pub use products::RestockLowStockUseCase;
pub use reports::GenerateCrmReportUseCase;
