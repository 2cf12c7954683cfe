pub mod generate_crm_report;

pub use generate_crm_report::GenerateCrmReportUseCase;
