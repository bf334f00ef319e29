use crate::context::ApplicationContext;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod rest_api;

pub async fn run_server(application_context: ApplicationContext) -> std::io::Result<()> {
	let address = application_context.configuration.address;
	axum_server::bind(address)
		.serve(create_router(application_context).into_make_service())
		.await
}

pub fn create_router(application_context: ApplicationContext) -> Router {
	Router::new()
		.nest("/api", rest_api::rest_api(application_context.clone()))
		.layer(TraceLayer::new_for_http())
		.with_state(application_context)
}
