use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkFromHomeDomainError {
    #[error("employee id is invalid")]
    InvalidEmployeeId,

    #[error("work from home reason is required")]
    InvalidReason,

    #[error("review status must be 'approved' or 'rejected'")]
    InvalidReviewDecision,

    #[error("a work from home request is already pending")]
    PendingRequestExists,

    #[error("no pending work from home request found")]
    PendingRequestNotFound,

    #[error("work from home request already processed")]
    InvalidStatusTransition,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
