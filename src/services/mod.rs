pub mod result_service;
pub mod sync_service;
pub mod tip_service;

pub use result_service::ResultService;
pub use sync_service::SyncService;
pub use tip_service::TipService;
