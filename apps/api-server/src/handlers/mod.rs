//! HTTP handlers and route configuration.
//!
//! Every handler is a linear pipeline: authenticate, authorize, execute,
//! respond. Mutation handlers answer with `303 See Other` - to the login
//! flow when unauthenticated, to the content's detail view when the actor
//! is not the owner, and to the operation's success target otherwise.

mod auth;
mod categories;
mod comments;
mod health;
mod posts;
mod profiles;
pub mod redirect;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Posts and their comments
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::home_feed))
                    .route("", web::post().to(posts::create))
                    .route("/{post_id}", web::get().to(posts::detail))
                    .route("/{post_id}", web::put().to(posts::update))
                    .route("/{post_id}", web::delete().to(posts::delete))
                    .route("/{post_id}/comments", web::post().to(comments::create))
                    .route(
                        "/{post_id}/comments/{comment_id}",
                        web::put().to(comments::update),
                    )
                    .route(
                        "/{post_id}/comments/{comment_id}",
                        web::delete().to(comments::delete),
                    ),
            )
            // Category and profile feeds
            .route("/category/{slug}", web::get().to(categories::category_feed))
            .route("/profile", web::put().to(profiles::update_profile))
            .route("/profile/{username}", web::get().to(profiles::profile_feed)),
    );
}
