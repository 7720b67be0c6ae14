pub mod bucket_service;
pub mod normalizer_service;
pub mod summary_service;
pub mod trend_service;
pub mod window_service;

pub use bucket_service::BucketService;
pub use normalizer_service::NormalizerService;
pub use summary_service::SummaryService;
pub use trend_service::TrendService;
pub use window_service::WindowService;
