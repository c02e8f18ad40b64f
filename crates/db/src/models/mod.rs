pub mod search_metric;
