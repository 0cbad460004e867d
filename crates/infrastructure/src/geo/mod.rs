pub mod maxmind;
pub mod null_resolver;

pub use maxmind::MaxMindGeoResolver;
pub use null_resolver::NullGeoResolver;
