use crate::session::{
    load_state, save_state, serialize_session_writes, SessionWriteLocks, SESSION_COOKIE_NAME,
};
use crate::session_store::ExpiringMemoryStore;
use axum::{
    extract::State,
    http::header,
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use recipe_app::domain::{IngredientList, Recipe, SessionAction, SessionState, View};
use recipe_app::AppContext;
use recipe_errors::AppError;
use recipe_ui::{render_error_page, render_input_page, render_recipe_page};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, Session, SessionManagerLayer};

#[derive(Deserialize)]
struct GenerateForm {
    #[serde(default)]
    ingredients: String,
}

pub fn build_router(
    app_context: AppContext,
    session_store: ExpiringMemoryStore,
    session_idle_minutes: i64,
) -> Router {
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            session_idle_minutes,
        )));

    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/reset", post(reset))
        .route("/recipe.pdf", get(download_pdf))
        .route("/api/history", get(history))
        .layer(session_layer)
        .layer(middleware::from_fn_with_state(
            SessionWriteLocks::default(),
            serialize_session_writes,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app_context)
}

async fn index(session: Session) -> Response {
    match load_state(&session).await {
        Ok(state) => Html(render_current_view(&state)).into_response(),
        Err(e) => render_error(e),
    }
}

async fn generate(
    State(ctx): State<AppContext>,
    session: Session,
    Form(form): Form<GenerateForm>,
) -> Response {
    let ingredients = match IngredientList::parse(&form.ingredients) {
        Ok(ingredients) => ingredients,
        Err(e) => {
            tracing::debug!("Rejected ingredient input: {}", e);
            return match load_state(&session).await {
                Ok(state) => {
                    Html(render_input_page(Some(e.user_message()), newest_first(&state)))
                        .into_response()
                }
                Err(e) => render_error(e),
            };
        }
    };

    let recipe = match ctx.generate_recipe.execute(ingredients).await {
        Ok(recipe) => recipe,
        Err(e) => {
            tracing::error!(retryable = e.is_retryable(), "Recipe generation failed: {}", e);
            return render_error(e);
        }
    };
    tracing::info!(recipe_id = %recipe.id, "Recipe generated");

    let state = match load_state(&session).await {
        Ok(state) => state.apply(SessionAction::RecipeGenerated(recipe)),
        Err(e) => return render_error(e),
    };
    match save_state(&session, &state).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => render_error(e),
    }
}

async fn reset(session: Session) -> Result<Redirect, AppError> {
    let state = load_state(&session).await?;
    save_state(&session, &state.apply(SessionAction::StartOver)).await?;
    Ok(Redirect::to("/"))
}

async fn download_pdf(
    State(ctx): State<AppContext>,
    session: Session,
) -> Result<Response, AppError> {
    let state = load_state(&session).await?;
    let bytes = ctx.export_pdf.execute(state.current_recipe()).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, r#"attachment; filename="recipe.pdf""#),
        ],
        bytes,
    )
        .into_response())
}

async fn history(session: Session) -> Result<Json<Vec<Recipe>>, AppError> {
    let state = load_state(&session).await?;
    Ok(Json(newest_first(&state)))
}

fn render_current_view(state: &SessionState) -> String {
    match (state.view, state.current_recipe()) {
        (View::Result, Some(recipe)) => render_recipe_page(recipe),
        _ => render_input_page(None, newest_first(state)),
    }
}

fn newest_first(state: &SessionState) -> Vec<Recipe> {
    state.history_newest_first().cloned().collect()
}

fn render_error(error: AppError) -> Response {
    (error.status_code(), Html(render_error_page(&error))).into_response()
}
