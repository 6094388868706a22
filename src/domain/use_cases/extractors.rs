use std::future::Future;

use actix_web::{dev::Payload, web::Bytes, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{entities::validation::deserialize_error, errors::AppError};

/// JSON request body whose shape errors name the offending wire path.
///
/// Usage: take `data: JsonBody<NewProject>` instead of `web::Json<NewProject>`.
/// Content-type and size problems are reported against `body`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_json = is_json_content(req);
        let path = req.path().to_string();
        let body = Bytes::from_request(req, payload);

        Box::pin(async move {
            read_json(is_json, &path, body)
                .await
                .map(JsonBody)
                .map_err(Into::into)
        })
    }
}

async fn read_json<T>(
    is_json: bool,
    path: &str,
    body: impl Future<Output = Result<Bytes, actix_web::Error>>,
) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if !is_json {
        return Err(AppError::invalid_field("body", "Content-Type must be application/json"));
    }

    let bytes = body.await.map_err(|e| {
        debug!(%path, "Failed to read request body: {}", e);
        AppError::invalid_field("body", e.to_string())
    })?;

    let mut de = serde_json::Deserializer::from_slice(&bytes);
    let value = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        debug!(%path, "Rejected request body: {}", e);
        deserialize_error(&e)
    })?;
    de.end()
        .map_err(|e| AppError::invalid_field("body", e.to_string()))?;

    Ok(value)
}

fn is_json_content(req: &HttpRequest) -> bool {
    let content_type = req.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    struct Draft {
        title: String,
        tech_stack: Vec<String>,
    }

    async fn extract(content_type: &str, body: &'static str) -> Result<JsonBody<Draft>, AppError> {
        let (req, mut payload) = TestRequest::post()
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_http_parts();

        JsonBody::<Draft>::from_request(&req, &mut payload)
            .await
            .map_err(|e| {
                e.as_error::<AppError>()
                    .map(|app| AppError::ValidationError(app.field_errors().to_vec()))
                    .unwrap_or_else(|| AppError::InternalError(e.to_string()))
            })
    }

    #[actix_rt::test]
    async fn well_formed_bodies_are_extracted() {
        let body = extract("application/json", r#"{"title":"Cache","techStack":["Rust"]}"#)
            .await
            .unwrap()
            .into_inner();

        assert_eq!(body.title, "Cache");
        assert_eq!(body.tech_stack, vec!["Rust"]);
    }

    #[actix_rt::test]
    async fn ill_typed_entries_name_their_position() {
        let err = extract("application/json", r#"{"title":"Cache","techStack":["Rust",42]}"#)
            .await
            .unwrap_err();

        assert_eq!(err.field_errors()[0].field, "techStack[1]");
    }

    #[actix_rt::test]
    async fn non_json_content_is_rejected() {
        let err = extract("text/plain", r#"{"title":"Cache","techStack":[]}"#)
            .await
            .unwrap_err();

        assert_eq!(err.field_errors()[0].field, "body");
    }

    #[actix_rt::test]
    async fn trailing_garbage_is_rejected() {
        let err = extract("application/json", r#"{"title":"Cache","techStack":[]} extra"#)
            .await
            .unwrap_err();

        assert_eq!(err.field_errors()[0].field, "body");
    }
}
