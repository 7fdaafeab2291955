use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(
            crate::api::dtos::common::QueryDescriptor,
            crate::api::dtos::common::ValidationErrorResponse,
            crate::api::dtos::common::ErrorResponse,
            crate::api::dtos::pop_dto::ProofOfPlayRecord,
            crate::api::dtos::pop_dto::PopDetailsListResponse,
        )
    ),
    tags(
        (name = "proof-of-play", description = "Proof-of-play detail listings"),
        (name = "impressions", description = "Impression listings"),
    ),
    info(
        title = "Proof-of-Play Report API",
        version = "0.1.0",
        description = "Request and response schemas for the proof-of-play and impression reports",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;
