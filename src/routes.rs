// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{
        self, admin, auth, chat_log, deck, flashcard, grade_log, import, leaderboard, profile,
        quiz, study_log, tips,
    },
    models::user::Role,
    state::AppState,
    utils::jwt::{Access, AuthGate, authorize},
};

const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Assembles the main application router.
///
/// * Public and gated routes are built separately and merged per resource.
/// * Gates are attached with `route_layer`, so an unauthenticated request is
///   rejected before its body is parsed.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins = ["http://localhost:3000", "http://127.0.0.1:3000", "http://localhost:4100"]
        .into_iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    let signed_in = middleware::from_fn_with_state(
        AuthGate::new(&state, Access::Authenticated),
        authorize,
    );
    let admin_only =
        middleware::from_fn_with_state(AuthGate::new(&state, Access::Roles(ADMIN_ONLY)), authorize);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .merge(
            Router::new()
                .route("/me", get(auth::me))
                .route_layer(signed_in.clone()),
        );

    let admin_routes = Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/reset-password", post(admin::reset_password))
        .route_layer(admin_only);

    let quiz_routes = Router::new()
        .route("/apush", get(quiz::generate_quiz))
        .route("/apush/submit", post(quiz::submit_quiz));

    let leaderboard_routes = Router::new()
        .route("/", get(leaderboard::get_leaderboard))
        .route("/apush", get(leaderboard::get_leaderboard))
        .merge(
            Router::new()
                .route("/", post(leaderboard::create_entry))
                .route("/{id}", delete(leaderboard::delete_entry))
                .route_layer(signed_in.clone()),
        );

    let deck_routes = Router::new()
        .route("/{id}", get(deck::get_deck))
        .merge(
            Router::new()
                .route("/", post(deck::create_deck).get(deck::list_decks))
                .route("/{id}", put(deck::update_deck).delete(deck::delete_deck))
                .route_layer(signed_in.clone()),
        );

    let flashcard_routes = Router::new()
        .route(
            "/",
            post(flashcard::create_flashcard)
                .get(flashcard::list_flashcards)
                .put(flashcard::update_flashcard)
                .patch(flashcard::update_flashcard)
                .delete(flashcard::delete_flashcard),
        )
        .route_layer(signed_in.clone());

    let study_log_routes = Router::new()
        .route(
            "/",
            post(study_log::create_study_log)
                .get(study_log::list_study_logs)
                .put(study_log::update_study_log)
                .patch(study_log::update_study_log)
                .delete(study_log::delete_study_log),
        )
        .route_layer(signed_in.clone());

    let grade_log_routes = Router::new()
        .route(
            "/",
            post(grade_log::create_grade_log)
                .get(grade_log::list_grade_logs)
                .put(grade_log::update_grade_log)
                .patch(grade_log::update_grade_log)
                .delete(grade_log::delete_grade_log),
        )
        .route_layer(signed_in.clone());

    let import_routes = Router::new()
        .route("/", post(import::import_flashcards))
        .route_layer(signed_in.clone());

    let profile_routes = Router::new()
        .route("/", get(profile::list_profiles))
        .route("/{id}", get(profile::get_profile))
        .merge(
            Router::new()
                .route("/", post(profile::create_profile))
                .route(
                    "/{id}",
                    put(profile::update_profile).delete(profile::delete_profile),
                )
                .route_layer(signed_in.clone()),
        );

    let chat_log_routes = Router::new()
        .route(
            "/",
            post(chat_log::create_chat_log).get(chat_log::list_chat_logs),
        )
        .route("/{id}", get(chat_log::get_chat_log))
        .route_layer(signed_in);

    Router::new()
        .route("/api/id", get(handlers::health))
        .nest("/api/auth", auth_routes)
        .nest("/api/admin", admin_routes)
        .nest("/api/quiz", quiz_routes)
        .nest("/api/leaderboard", leaderboard_routes)
        .nest("/api/deck", deck_routes)
        .nest("/api/flashcard", flashcard_routes)
        .nest("/api/studylog", study_log_routes)
        .nest("/api/gradelog", grade_log_routes)
        .nest("/api/import-flashcards", import_routes)
        .nest("/api/profile", profile_routes)
        .nest("/api/chatlog", chat_log_routes)
        .route("/api/tips/{subject}", get(tips::get_tips))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
