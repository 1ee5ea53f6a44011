pub mod dashboard;
pub mod demo;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod policy;
pub mod report;
pub mod sla;
pub mod validate;
pub mod visibility;

#[cfg(test)]
mod tests {
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::invalid_date("entry_date", "not-a-date");
        assert_eq!(err.code, "INVALID_DATE");
        assert_eq!(err.retryable, false);
        assert!(err.details.is_some());
    }
}
