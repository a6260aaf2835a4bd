use axum::{
    extract::{OriginalUri, Query, Request},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::MethodFilter,
    Json,
};
use emissions::RankError;
use model::ExampleData;
use routing::PlanError;
use schemars::{schema_for, schema_for_value, JsonSchema};
use serde::{Deserialize, Serialize};
use utility::validate::ValidationError;

pub type RouteResult<O> = Result<O, RouteErrorResponse>;

/// A `MethodFilter` that matches all http methods.
pub(crate) const METHOD_FILTER_ALL: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PATCH)
    .or(MethodFilter::PUT)
    .or(MethodFilter::DELETE);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VecResponse<T> {
    pub data: Vec<T>,
}

impl<T> VecResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn json(self) -> Json<Self> {
        Json(self)
    }
}

// - Services returning commonly used responses -

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchemaParams {
    #[serde(default = "Default::default")]
    example_data: bool,
}

pub(crate) async fn schema<T: ExampleData + JsonSchema + Serialize>(
    Query(params): Query<SchemaParams>,
) -> impl IntoResponse {
    if params.example_data {
        Json(schema_for_value!(T::example_data()))
    } else {
        Json(schema_for!(T))
    }
}

pub(crate) async fn schema_no_example<T: JsonSchema + Serialize>(
    Query(_params): Query<SchemaParams>,
) -> impl IntoResponse {
    Json(schema_for!(T))
}

pub(crate) async fn route_not_found(
    OriginalUri(original_uri): OriginalUri,
    req: Request,
) -> impl IntoResponse {
    RouteErrorResponse::not_found(req.method(), original_uri.path())
}

// - Commonly used responses -

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteErrorResponse {
    #[serde(skip)]
    pub status_code: StatusCode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_information: Option<String>,
}

impl RouteErrorResponse {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            http_method: None,
            requested_uri: None,
            message: None,
            detailed_information: None,
        }
    }

    pub fn not_found(method: &Method, uri: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND)
            .with_method(method)
            .with_uri(uri)
            .with_default_message()
    }

    pub fn with_method(mut self, method: &Method) -> Self {
        self.http_method = Some(method.to_string());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.requested_uri = Some(uri.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_default_message(self) -> Self {
        let message = self
            .status_code
            .canonical_reason()
            .unwrap_or("i dunno what happened here :/");
        self.with_message(message)
    }

    pub fn with_detailed_information(mut self, message: impl Into<String>) -> Self {
        self.detailed_information = Some(message.into());
        self
    }
}

impl From<ValidationError> for RouteErrorResponse {
    fn from(value: ValidationError) -> Self {
        Self::new(StatusCode::BAD_REQUEST).with_message(value.to_string())
    }
}

impl From<PlanError> for RouteErrorResponse {
    fn from(value: PlanError) -> Self {
        match value {
            PlanError::LocationNotFound(location) => {
                Self::new(StatusCode::BAD_REQUEST)
                    .with_message(format!("Location not found: {}", location))
            }
            PlanError::Provider(why) => Self::new(StatusCode::BAD_GATEWAY)
                .with_message(
                    "Routing service temporarily unavailable. \
                     Please try again later.",
                )
                .with_detailed_information(why.to_string()),
        }
    }
}

impl From<RankError> for RouteErrorResponse {
    fn from(value: RankError) -> Self {
        match value {
            RankError::NoRoutesFound => Self::new(StatusCode::BAD_REQUEST)
                .with_message(value.to_string())
                .with_detailed_information("Try different locations."),
        }
    }
}

impl IntoResponse for RouteErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let response = RouteErrorResponse::from(ValidationError::Missing("origin"));
        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(response.message.as_deref(), Some("Origin is required"));
    }

    #[test]
    fn unknown_locations_map_to_bad_request() {
        let response =
            RouteErrorResponse::from(PlanError::LocationNotFound("Atlantis".into()));
        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.message.as_deref(),
            Some("Location not found: Atlantis")
        );
    }

    #[test]
    fn provider_failures_map_to_bad_gateway() {
        let why = std::io::Error::new(std::io::ErrorKind::Other, "timeout");
        let response = RouteErrorResponse::from(PlanError::provider(why));
        assert_eq!(response.status_code, StatusCode::BAD_GATEWAY);
        assert!(response.detailed_information.is_some());
    }

    #[test]
    fn missing_routes_map_to_bad_request() {
        let response = RouteErrorResponse::from(RankError::NoRoutesFound);
        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.detailed_information.as_deref(),
            Some("Try different locations.")
        );
    }
}
