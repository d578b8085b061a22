use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub usage: &'static str,
    pub params: &'static [&'static str],
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: "/categories",
        usage: "Get all of the categories available for the app.",
        params: &[],
    },
    Endpoint {
        method: "GET",
        path: "/:category/posts",
        usage: "Get all of the posts for a particular category.",
        params: &[],
    },
    Endpoint {
        method: "GET",
        path: "/posts",
        usage: "Get all of the posts. Useful for the main page when no category is selected.",
        params: &[],
    },
    Endpoint {
        method: "POST",
        path: "/posts",
        usage: "Add a new post.",
        params: &[
            "id - UUID should be fine, but any unique id will work",
            "timestamp - integer, e.g. milliseconds since the epoch",
            "title - String",
            "body - String",
            "author - String",
            "category - any of the paths returned by /categories",
        ],
    },
    Endpoint {
        method: "GET",
        path: "/posts/:id",
        usage: "Get the details of a single post.",
        params: &[],
    },
    Endpoint {
        method: "POST",
        path: "/posts/:id",
        usage: "Vote on a post.",
        params: &["option - String: either \"upVote\" or \"downVote\""],
    },
    Endpoint {
        method: "PUT",
        path: "/posts/:id",
        usage: "Edit the details of an existing post.",
        params: &["title - String", "body - String"],
    },
    Endpoint {
        method: "DELETE",
        path: "/posts/:id",
        usage: "Sets the deleted flag for a post to 'true'. Sets the parentDeleted flag for all child comments to 'true'.",
        params: &[],
    },
    Endpoint {
        method: "GET",
        path: "/posts/:id/comments",
        usage: "Get all the comments for a single post.",
        params: &[],
    },
    Endpoint {
        method: "POST",
        path: "/comments",
        usage: "Add a comment to a post.",
        params: &[
            "id - any unique id",
            "timestamp - integer",
            "body - String",
            "author - String",
            "parentId - should match a post id in the database",
        ],
    },
    Endpoint {
        method: "GET",
        path: "/comments/:id",
        usage: "Get the details for a single comment.",
        params: &[],
    },
    Endpoint {
        method: "POST",
        path: "/comments/:id",
        usage: "Vote on a comment.",
        params: &["option - String: either \"upVote\" or \"downVote\""],
    },
    Endpoint {
        method: "PUT",
        path: "/comments/:id",
        usage: "Edit the details of an existing comment.",
        params: &["timestamp - integer", "body - String"],
    },
    Endpoint {
        method: "DELETE",
        path: "/comments/:id",
        usage: "Sets a comment's deleted flag to 'true'.",
        params: &[],
    },
];

#[derive(Template)]
#[template(path = "help.html")]
pub struct HelpTemplate {
    pub endpoints: &'static [Endpoint],
}

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

pub async fn index() -> Html<HelpTemplate> {
    Html(HelpTemplate {
        endpoints: ENDPOINTS,
    })
}
