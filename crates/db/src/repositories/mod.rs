mod search_metric_repo;

pub use search_metric_repo::SearchMetricRepo;
