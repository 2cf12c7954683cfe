use super::Repositories;
use crm_jobs_application::use_cases::{
    CleanupInactiveCustomersUseCase, GenerateCrmReportUseCase, HeartbeatUseCase,
    RestockLowStockUseCase, SendOrderRemindersUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub cleanup_customers: Arc<CleanupInactiveCustomersUseCase>,
    pub send_reminders: Arc<SendOrderRemindersUseCase>,
    pub restock_products: Arc<RestockLowStockUseCase>,
    pub generate_report: Arc<GenerateCrmReportUseCase>,
    pub heartbeat: Arc<HeartbeatUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            cleanup_customers: Arc::new(CleanupInactiveCustomersUseCase::new(
                repos.customer.clone(),
                repos.logs.cleanup.clone(),
            )),
            send_reminders: Arc::new(SendOrderRemindersUseCase::new(
                repos.order.clone(),
                repos.logs.reminders.clone(),
            )),
            restock_products: Arc::new(RestockLowStockUseCase::new(
                repos.product.clone(),
                repos.logs.restock.clone(),
            )),
            generate_report: Arc::new(GenerateCrmReportUseCase::new(
                repos.customer.clone(),
                repos.order.clone(),
                repos.logs.report.clone(),
            )),
            heartbeat: Arc::new(HeartbeatUseCase::new(
                repos.health.clone(),
                repos.logs.heartbeat.clone(),
            )),
        }
    }
}
