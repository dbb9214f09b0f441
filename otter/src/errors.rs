//! # Error Handling
//!
//! Every fallible operation in otter returns [`OtterError`]. The enum maps
//! onto HTTP status codes so the dashboard router can hand it straight back
//! to axum, and it keeps internal detail (database errors, misconfigured
//! resources) in the logs instead of the response body.
//!
//! ## Fatal versus degraded
//!
//! A relation that points at a resource nobody registered, or names an
//! accessor the model does not define, is a programming error and fails the
//! whole serialization with [`OtterError::UnresolvedResource`] or
//! [`OtterError::UndefinedRelation`]. A relation whose kind the resolver does
//! not understand is *not* an error; its linkage fields are simply left null.
//!
//! ## Logging
//!
//! Internal errors are logged with `tracing` when they are converted into a
//! response. Install a subscriber in your application to see them:
//!
//! ```rust,ignore
//! tracing_subscriber::fmt().with_target(false).compact().init();
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

/// Error type for resolution, serialization and the dashboard routes.
#[derive(Debug)]
pub enum OtterError {
    /// 404 Not Found - no row matches the requested key, or no resource
    /// answers to the requested route name
    NotFound {
        /// Resource or model name (e.g. "Post")
        resource: String,
        /// Key that was looked up
        key: Option<String>,
    },

    /// 500 - a declared relation targets a resource missing from the registry
    UnresolvedResource {
        /// Base name the relation asked for
        name: String,
        /// Namespace the registry resolves under
        namespace: String,
    },

    /// 500 - a declared relation names an accessor the model does not define
    UndefinedRelation {
        /// Resource declaring the relation
        resource: String,
        /// Relation name
        relation: String,
    },

    /// 400 Bad Request - malformed input from the caller
    BadRequest {
        /// User-facing error message
        message: String,
    },

    /// 403 Forbidden - the dashboard gate refused the request
    Forbidden {
        /// User-facing error message
        message: String,
    },

    /// 500 - database error (details logged, not exposed)
    Database {
        /// User-facing generic message
        message: String,
        /// Internal error (logged, not sent to user)
        internal: DbErr,
    },

    /// 500 - generic internal error
    Internal {
        /// User-facing generic message
        message: String,
        /// Internal error details (logged, not sent to user)
        internal: Option<String>,
    },
}

impl OtterError {
    /// Create a 404 Not Found error
    pub fn not_found(resource: impl Into<String>, key: Option<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            key,
        }
    }

    /// Create an unresolved resource error for `name` under `namespace`
    pub fn unresolved_resource(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::UnresolvedResource {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Create an undefined relation error
    pub fn undefined_relation(resource: impl Into<String>, relation: impl Into<String>) -> Self {
        Self::UndefinedRelation {
            resource: resource.into(),
            relation: relation.into(),
        }
    }

    /// Create a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a 500 error from a database error
    ///
    /// # Example
    /// ```rust,ignore
    /// let rows = Entity::find().all(db).await.map_err(OtterError::database)?;
    /// ```
    pub fn database(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) => Self::from(err),
            internal => Self::Database {
                message: "A database error occurred".to_string(),
                internal,
            },
        }
    }

    /// Create a 500 error with optional internal details
    pub fn internal(message: impl Into<String>, internal: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            internal,
        }
    }

    /// HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::UnresolvedResource { .. }
            | Self::UndefinedRelation { .. }
            | Self::Database { .. }
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing error message (sanitized)
    fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, key } => {
                if let Some(key) = key {
                    format!("{resource} with key '{key}' not found")
                } else {
                    format!("{resource} not found")
                }
            }
            Self::UnresolvedResource { .. } | Self::UndefinedRelation { .. } => {
                "Resource is misconfigured".to_string()
            }
            Self::BadRequest { message }
            | Self::Forbidden { message }
            | Self::Database { message, .. }
            | Self::Internal { message, .. } => message.clone(),
        }
    }

    /// Detailed message for logs and `Display`
    fn detail(&self) -> String {
        match self {
            Self::UnresolvedResource { name, namespace } => {
                format!("Resource '{namespace}{name}' is not registered")
            }
            Self::UndefinedRelation { resource, relation } => {
                format!("Relation '{relation}' is not defined on the model of {resource}")
            }
            _ => self.user_message(),
        }
    }

    fn log_internal(&self) {
        match self {
            Self::Database { internal, .. } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            Self::Internal {
                internal: Some(details),
                ..
            } => {
                tracing::error!(details = %details, "Internal error occurred");
            }
            Self::UnresolvedResource { .. } | Self::UndefinedRelation { .. } => {
                tracing::error!(details = %self.detail(), "Resource configuration error");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "Dashboard error"
                );
            }
        }
    }
}

/// Error body sent to clients
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for OtterError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl fmt::Display for OtterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail())
    }
}

impl std::error::Error for OtterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database { internal, .. } => Some(internal),
            _ => None,
        }
    }
}

/// `DbErr::RecordNotFound` becomes a 404, every other `DbErr` a sanitized 500.
impl From<DbErr> for OtterError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(msg) => {
                let resource = msg.split_whitespace().next().unwrap_or("Resource");
                Self::NotFound {
                    resource: resource.to_string(),
                    key: None,
                }
            }
            _ => Self::Database {
                message: "A database error occurred".to_string(),
                internal: err,
            },
        }
    }
}
