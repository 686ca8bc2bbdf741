pub mod api;
pub mod http;

// Re-export comodi
pub use api::PostsApi;
pub use http::{
    create_url, decode_create_response, decode_post_list, CreatePostRequest, CreatePostResponse,
    ListPostsQuery, POSTS_PATH,
};
