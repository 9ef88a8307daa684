mod aggregator;

pub use aggregator::CapabilityAggregator;
