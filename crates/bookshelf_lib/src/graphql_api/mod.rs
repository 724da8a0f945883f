pub mod api_types;
mod server;

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, Schema, SchemaBuilder};
use async_graphql_axum::GraphQL;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use bookshelf_store::Store;

pub use self::server::{MutationRoot, QueryRoot};
use self::api_types::App;

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct ApiSchemaContext {
    pub store: Store,
}

impl ApiSchemaContext {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn app(&self) -> App {
        App::from(self.store.clone())
    }
}

pub fn api_schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}

pub fn api_schema(ctx: ApiSchemaContext) -> ApiSchema {
    api_schema_builder().data(ctx).finish()
}

pub fn ctx_data<'a>(ctx: &'a Context) -> &'a ApiSchemaContext {
    ctx.data::<ApiSchemaContext>()
        .expect("Failed to get API context")
}

/// HTTP routes of the API server: a readiness message at `/`, and GraphiQL
/// plus the GraphQL endpoint itself at `/graphql`.
pub fn axum_router(api_schema: ApiSchema) -> Router {
    Router::new()
        .route("/", get(|| async { "Ready to roll!" }))
        .route(
            "/graphql",
            get(graphiql_route).post_service(GraphQL::new(api_schema)),
        )
}

async fn graphiql_route() -> impl IntoResponse {
    axum::response::Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
