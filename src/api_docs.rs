use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::generate_praise::generate_praise,
    ),
    components(
        schemas(
            api::generate_praise::ActionFields,
            api::generate_praise::GenerationReply,
        )
    ),
    tags(
        (name = "shisho", description = "Reading companion: book search and librarian replies")
    )
)]
pub struct ApiDoc;
