//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every board endpoint, the health probes, the DTO
//! schemas and the session cookie security scheme. Swagger UI serves it in
//! debug builds and `cargo run --bin openapi-dump` exports it for tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::board_dto::{
    AuthorResponse, CreateTopicBody, PostQuestionBody, QuestionResponse, RankedQuestionResponse,
    TopicResponse, TopicViewResponse, VoteTallyResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie written by the authentication service at sign-in.",
            ))),
        );
    }
}

/// OpenAPI document for the board API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Agora board API",
        description = "Topics, questions and one-vote-per-viewer ranking for a community Q&A board."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::topics::list_my_topics,
        crate::inbound::http::topics::create_topic,
        crate::inbound::http::topics::get_topic,
        crate::inbound::http::topics::post_question,
        crate::inbound::http::votes::cast_vote,
        crate::inbound::http::votes::retract_vote,
        crate::inbound::http::votes::vote_tally,
        crate::inbound::http::auth::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        AuthorResponse,
        CreateTopicBody,
        PostQuestionBody,
        TopicResponse,
        QuestionResponse,
        RankedQuestionResponse,
        TopicViewResponse,
        VoteTallyResponse,
    )),
    tags(
        (name = "topics", description = "Topics and the questions posted under them"),
        (name = "votes", description = "Casting, retracting and counting votes"),
        (name = "session", description = "Session lifecycle"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
