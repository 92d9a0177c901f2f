use chrono::Utc;

/// Clock seam. Every timing decision in the service (reminder firing,
/// check-in due computation, seeding timestamps) reads the current time
/// through this trait so tests can pin it.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// Wall-clock implementation used outside of tests
pub struct RealSys {}

impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
