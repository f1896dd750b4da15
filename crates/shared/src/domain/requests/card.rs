use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCardRequest {
    #[validate(range(min = 1, message = "Account ID must be at least 1"))]
    pub account_id: i32,

    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,
}
