//! Post handlers - CRUD, search and tag filtering.

use actix_web::{HttpResponse, web};

use plume_core::DomainError;
use plume_core::domain::{NewPost, Post, PostChanges, PostListing, parse_tags};
use plume_shared::ApiResponse;
use plume_shared::dto::{
    CreatePostRequest, ListPostsQuery, PostListResponse, PostResponse, UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        handle: post.handle,
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: post.author,
        tags: post.tags,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

fn to_list_response(listing: PostListing) -> PostListResponse {
    let skipped = listing.warnings.len();
    PostListResponse::new(listing.posts.into_iter().map(to_response).collect(), skipped)
}

fn validate_create(req: CreatePostRequest) -> Result<NewPost, DomainError> {
    let mut errors = Vec::new();
    if req.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    }
    if req.content.trim().is_empty() {
        errors.push("Content is required".to_string());
    }
    if !errors.is_empty() {
        return Err(DomainError::Validation(errors));
    }

    Ok(NewPost {
        title: req.title,
        content: req.content,
        author: req.author,
        tags: req.tags.as_deref().map(parse_tags).unwrap_or_default(),
    })
}

fn validate_update(req: UpdatePostRequest) -> Result<PostChanges, DomainError> {
    let mut errors = Vec::new();
    if req.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        errors.push("Title cannot be empty".to_string());
    }
    if req.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
        errors.push("Content cannot be empty".to_string());
    }
    if !errors.is_empty() {
        return Err(DomainError::Validation(errors));
    }

    Ok(PostChanges {
        title: req.title,
        content: req.content,
        author: req.author,
        tags: req.tags.as_deref().map(parse_tags),
    })
}

/// GET /api/posts?q=...&tag=...
///
/// `q` takes precedence over `tag`; blank values are ignored.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let search = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let tag = query.tag.as_deref().map(str::trim).filter(|t| !t.is_empty());

    let listing = match (search, tag) {
        (Some(q), _) => state.posts.search(q).await,
        (None, Some(t)) => state.posts.filter_by_tag(t).await,
        (None, None) => state.posts.list_all().await,
    };

    if !listing.is_complete() {
        tracing::warn!(skipped = listing.warnings.len(), "Listing is partial");
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_list_response(listing))))
}

/// GET /api/tags/{tag}
pub async fn posts_by_tag(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let tag = path.into_inner();
    let listing = state.posts.filter_by_tag(&tag).await;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_list_response(listing))))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = validate_create(body.into_inner())?;
    let post = state.posts.create(new_post).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(to_response(post))))
}

/// GET /api/posts/{handle}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let handle = path.into_inner();
    let post = state
        .posts
        .get_by_handle(&handle)
        .await
        .ok_or_else(|| DomainError::post_not_found(&handle))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// PUT /api/posts/{handle}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let handle = path.into_inner();
    let changes = validate_update(body.into_inner())?;
    let post = state
        .posts
        .update(&handle, changes)
        .await?
        .ok_or_else(|| DomainError::post_not_found(&handle))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        to_response(post),
        "Post updated",
    )))
}

/// DELETE /api/posts/{handle}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let handle = path.into_inner();
    if !state.posts.delete(&handle).await? {
        return Err(DomainError::post_not_found(&handle).into());
    }

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::json;

    use plume_shared::dto::{PostListResponse, PostResponse};
    use plume_shared::{ApiResponse, ErrorResponse};

    use crate::handlers::{configure_routes, json_config};
    use crate::state::AppState;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::in_memory()))
                    .app_data(json_config())
                    .configure(configure_routes),
            )
            .await
        };
    }

    macro_rules! create {
        ($app:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json($body)
                .to_request();
            let resp: ApiResponse<PostResponse> = test::call_and_read_body_json(&$app, req).await;
            resp.data.unwrap()
        }};
    }

    #[actix_web::test]
    async fn test_create_post_defaults() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "My First Post", "content": "Hello there" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: ApiResponse<PostResponse> = test::read_body_json(resp).await;
        let post = body.data.unwrap();
        assert_eq!(post.author, "Anonymous");
        assert!(post.tags.is_empty());
        assert!(!post.id.is_empty());
        assert!(post.handle.starts_with("my-first-post-"));
    }

    #[actix_web::test]
    async fn test_create_post_splits_tags() {
        let app = app!();
        let post = create!(
            app,
            json!({ "title": "Tagged", "content": "Body", "author": "Ada", "tags": "rust, web,, rust" })
        );

        assert_eq!(post.author, "Ada");
        assert_eq!(post.tags, vec!["rust", "web", "rust"]);
    }

    #[actix_web::test]
    async fn test_create_post_requires_title_and_content() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "   " }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, 422);
        assert_eq!(body.errors, vec!["Title is required", "Content is required"]);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_unknown_post_is_404() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/posts/nothing-here-00000000")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_then_get() {
        let app = app!();
        let created = create!(app, json!({ "title": "Before", "content": "Body", "tags": "a" }));

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", created.handle))
            .set_json(json!({ "title": "After" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", created.handle))
            .to_request();
        let body: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;
        let post = body.data.unwrap();

        assert_eq!(post.title, "After");
        assert_eq!(post.content, "Body");
        assert_eq!(post.tags, vec!["a"]);
        assert_eq!(post.created_at, created.created_at);
        assert_ne!(post.updated_at, created.updated_at);
    }

    #[actix_web::test]
    async fn test_update_rejects_blank_fields_and_unknown_handles() {
        let app = app!();
        let created = create!(app, json!({ "title": "Keep", "content": "Body" }));

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", created.handle))
            .set_json(json!({ "content": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::put()
            .uri("/api/posts/unknown-00000000")
            .set_json(json!({ "title": "New" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_post() {
        let app = app!();
        let created = create!(app, json!({ "title": "Gone", "content": "Body" }));
        let uri = format!("/api/posts/{}", created.handle);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_search_and_tag_filter() {
        let app = app!();
        create!(app, json!({ "title": "Hello World", "content": "Body", "tags": "go" }));
        create!(app, json!({ "title": "Other", "content": "Nothing", "tags": "golang" }));

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let all: ApiResponse<PostListResponse> = test::call_and_read_body_json(&app, req).await;
        let all = all.data.unwrap();
        assert_eq!(all.count, 2);
        assert_eq!(all.skipped, 0);

        let req = test::TestRequest::get().uri("/api/posts?q=HELLO").to_request();
        let found: ApiResponse<PostListResponse> = test::call_and_read_body_json(&app, req).await;
        let found = found.data.unwrap();
        assert_eq!(found.count, 1);
        assert_eq!(found.posts[0].title, "Hello World");

        let req = test::TestRequest::get().uri("/api/posts?tag=Go").to_request();
        let tagged: ApiResponse<PostListResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(tagged.data.unwrap().count, 1);

        let req = test::TestRequest::get().uri("/api/tags/golang").to_request();
        let tagged: ApiResponse<PostListResponse> = test::call_and_read_body_json(&app, req).await;
        let tagged = tagged.data.unwrap();
        assert_eq!(tagged.count, 1);
        assert_eq!(tagged.posts[0].title, "Other");
    }
}
