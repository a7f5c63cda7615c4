use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ReviewWfhRequestResource {
    /// `approved` or `rejected`.
    #[validate(length(min = 1))]
    pub status: String,
    #[validate(length(max = 1000))]
    pub comment: Option<String>,
}
