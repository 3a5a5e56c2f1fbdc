//! Blog post RPC handlers.
//!
//! Each handler unpacks its request message, calls the post service through
//! the call logger and wraps the resulting post. Domain errors become
//! statuses through `RpcError::from`, inside the logged call so the logger
//! sees the final status.

use actix_web::web;

use blog_shared::dto::{
    CreatePostRequest, CreatePostResponse, DeletePostRequest, DeletePostResponse, GetPostRequest,
    GetPostResponse, UpdatePostRequest, UpdatePostResponse,
};

use crate::middleware::{RpcError, RpcResult};
use crate::observability::CallIds;
use crate::state::AppState;

/// POST /blog.v1.BlogService/CreatePost
pub async fn create_post(
    state: web::Data<AppState>,
    ids: CallIds,
    body: web::Json<CreatePostRequest>,
) -> RpcResult<web::Json<CreatePostResponse>> {
    let posts = state.posts.clone();

    state
        .call_logger
        .intercept(&ids, "CreatePost", body.into_inner(), |req| async move {
            posts
                .create_post(
                    req.title,
                    req.content,
                    req.author,
                    req.publication_date,
                    req.tags,
                )
                .await
                .map(|post| CreatePostResponse { post: post.into() })
                .map_err(RpcError::from)
        })
        .await
        .map(web::Json)
}

/// POST /blog.v1.BlogService/GetPost
pub async fn get_post(
    state: web::Data<AppState>,
    ids: CallIds,
    body: web::Json<GetPostRequest>,
) -> RpcResult<web::Json<GetPostResponse>> {
    let posts = state.posts.clone();

    state
        .call_logger
        .intercept(&ids, "GetPost", body.into_inner(), |req| async move {
            posts
                .get_post(&req.post_id)
                .await
                .map(|post| GetPostResponse { post: post.into() })
                .map_err(RpcError::from)
        })
        .await
        .map(web::Json)
}

/// POST /blog.v1.BlogService/UpdatePost
pub async fn update_post(
    state: web::Data<AppState>,
    ids: CallIds,
    body: web::Json<UpdatePostRequest>,
) -> RpcResult<web::Json<UpdatePostResponse>> {
    let posts = state.posts.clone();

    state
        .call_logger
        .intercept(&ids, "UpdatePost", body.into_inner(), |req| async move {
            posts
                .update_post(&req.post_id, req.title, req.content, req.author, req.tags)
                .await
                .map(|post| UpdatePostResponse { post: post.into() })
                .map_err(RpcError::from)
        })
        .await
        .map(web::Json)
}

/// POST /blog.v1.BlogService/DeletePost
pub async fn delete_post(
    state: web::Data<AppState>,
    ids: CallIds,
    body: web::Json<DeletePostRequest>,
) -> RpcResult<web::Json<DeletePostResponse>> {
    let posts = state.posts.clone();

    state
        .call_logger
        .intercept(&ids, "DeletePost", body.into_inner(), |req| async move {
            posts
                .delete_post(&req.post_id)
                .await
                .map(|()| DeletePostResponse { success: true })
                .map_err(RpcError::from)
        })
        .await
        .map(web::Json)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use blog_core::{DomainError, DomainResult, Post, PostRepository};
    use blog_infra::InMemoryPostRepository;
    use blog_shared::{Code, StatusBody};

    use super::*;
    use crate::handlers::{SERVICE_PATH, configure_routes};
    use crate::observability::{CallLogger, CorrelationMiddleware};

    async fn app(
        state: AppState,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
    {
        test::init_service(
            App::new()
                .wrap(CorrelationMiddleware)
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await
    }

    fn in_memory_state() -> AppState {
        AppState::new(CallLogger::new(true))
    }

    async fn rpc<S>(app: &S, method: &str, body: Value) -> ServiceResponse
    where
        S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        let req = test::TestRequest::post()
            .uri(&format!("{SERVICE_PATH}/{method}"))
            .set_json(body)
            .to_request();
        test::call_service(app, req).await
    }

    async fn expect_status(res: ServiceResponse, code: Code) -> StatusBody {
        assert_eq!(res.status().as_u16(), code.http_status());
        let body: StatusBody = test::read_body_json(res).await;
        assert_eq!(body.code, code.as_i32());
        body
    }

    #[actix_web::test]
    async fn test_full_lifecycle() {
        let app = app(in_memory_state()).await;

        let res = rpc(
            &app,
            "CreatePost",
            json!({
                "title": "Test Title",
                "content": "Test Content",
                "author": "Test Author",
                "tags": ["a", "b"],
            }),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let created: CreatePostResponse = test::read_body_json(res).await;
        let id = created.post.post_id.clone();
        assert!(!id.is_empty());
        assert_eq!(created.post.tags, vec!["a", "b"]);

        let res = rpc(&app, "GetPost", json!({ "post_id": id })).await;
        let fetched: GetPostResponse = test::read_body_json(res).await;
        assert_eq!(fetched.post, created.post);

        let res = rpc(
            &app,
            "UpdatePost",
            json!({
                "post_id": id,
                "title": "Updated",
                "content": "Updated Content",
                "author": "Updated Author",
                "tags": [],
            }),
        )
        .await;
        let updated: UpdatePostResponse = test::read_body_json(res).await;
        assert_eq!(updated.post.post_id, id);
        assert_eq!(updated.post.title, "Updated");
        assert!(updated.post.tags.is_empty());

        let res = rpc(&app, "DeletePost", json!({ "post_id": id })).await;
        let deleted: DeletePostResponse = test::read_body_json(res).await;
        assert!(deleted.success);

        let res = rpc(&app, "GetPost", json!({ "post_id": id })).await;
        let body = expect_status(res, Code::NotFound).await;
        assert_eq!(body.message, "post not found");
    }

    #[actix_web::test]
    async fn test_invalid_create_is_invalid_argument() {
        let app = app(in_memory_state()).await;

        let res = rpc(
            &app,
            "CreatePost",
            json!({ "title": "t", "content": "", "author": "a" }),
        )
        .await;

        let body = expect_status(res, Code::InvalidArgument).await;
        assert_eq!(body.status, "INVALID_ARGUMENT");
    }

    #[actix_web::test]
    async fn test_empty_and_unknown_ids() {
        let app = app(in_memory_state()).await;

        for method in ["GetPost", "UpdatePost", "DeletePost"] {
            let res = rpc(&app, method, json!({ "post_id": "" })).await;
            expect_status(res, Code::InvalidArgument).await;

            let res = rpc(
                &app,
                method,
                json!({ "post_id": "missing", "title": "t", "content": "c", "author": "a" }),
            )
            .await;
            expect_status(res, Code::NotFound).await;
        }
    }

    #[actix_web::test]
    async fn test_undecodable_body_is_invalid_argument() {
        let app = app(in_memory_state()).await;

        let req = test::TestRequest::post()
            .uri(&format!("{SERVICE_PATH}/CreatePost"))
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;

        expect_status(res, Code::InvalidArgument).await;
    }

    /// Repository that rejects every insert as a collision and fails reads
    /// with an unclassified error.
    struct BrokenRepository;

    #[async_trait]
    impl PostRepository for BrokenRepository {
        async fn create(&self, _post: &Post) -> DomainResult<()> {
            Err(DomainError::DuplicatePost)
        }

        async fn get_by_id(&self, _id: &str) -> DomainResult<Post> {
            Err(DomainError::Internal("storage offline at shard 7".to_string()))
        }

        async fn update(&self, _post: &Post) -> DomainResult<()> {
            Err(DomainError::Internal("storage offline".to_string()))
        }

        async fn delete(&self, _id: &str) -> DomainResult<()> {
            Err(DomainError::Internal("storage offline".to_string()))
        }

        async fn list(&self) -> DomainResult<Vec<Post>> {
            Ok(Vec::new())
        }

        async fn count(&self) -> usize {
            0
        }
    }

    #[actix_web::test]
    async fn test_duplicate_and_internal_translation() {
        let state = AppState::with_repository(Arc::new(BrokenRepository), CallLogger::default());
        let app = app(state).await;

        let res = rpc(
            &app,
            "CreatePost",
            json!({ "title": "t", "content": "c", "author": "a" }),
        )
        .await;
        expect_status(res, Code::AlreadyExists).await;

        let res = rpc(&app, "GetPost", json!({ "post_id": "any" })).await;
        let body = expect_status(res, Code::Internal).await;
        assert_eq!(body.message, "internal error");
    }

    #[actix_web::test]
    async fn test_health_reports_store_size() {
        let repo = Arc::new(InMemoryPostRepository::new());
        repo.create(&Post::new("p1", "t", "c", "a", "", Vec::new()))
            .await
            .unwrap();
        let app = app(AppState::with_repository(repo, CallLogger::default())).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["posts"], 1);
    }
}
