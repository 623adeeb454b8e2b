//! Error page rendered when the router cannot resolve a path.
//!
//! On the server the response status is taken from the first [`AppError`].

use http::status::StatusCode;
use leptos::{
    html::{div, h1},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the [`AppError`]s out of an error set, skipping foreign error types.
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the error page.
///
/// `outside_errors` come from the routing fallback during SSR and take
/// precedence over the reactive `errors` set used by error boundaries. With
/// neither present the page still renders, titled "Error" with no entries.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors.map_or_else(
        || errors.unwrap_or_else(|| RwSignal::new(Errors::default())),
        RwSignal::new,
    );
    let errors = app_errors(errors.get_untracked());

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(first) = errors.first() {
            tracing::warn!(error = %first, status = %first.status_code(), "Rendering error page");
            if let Some(response) = use_context::<ResponseOptions>() {
                response.set_status(first.status_code());
            }
        }
    }

    div().class("grid place-content-center px-4 h-full antialiased text-[#f2f1f1]").child((
        h1().class("mb-6 text-center title_text").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        For(
            ForProps::builder()
                .each(move || errors.clone().into_iter().enumerate())
                .key(|(index, _error)| *index)
                .children(|(_index, error)| {
                    let error_code = error.status_code();

                    div().class("flex flex-col gap-1 justify-center items-center").child((
                        h1().class("text-xl tracking-widest text-gray-400 uppercase").child(
                            format!("{error_code}| {error}")
                        ),
                        div().class("mt-6 text-center font-amiri duration-200 hover:text-[#677066]").child(
                            A(AProps::builder()
                                .href("/")
                                .children(ToChildren::to_children(|| "Back to The Soil Watch"))
                                .build()
                            )
                        )
                    ))
                }).build(),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn test_app_errors_extracts_inserted_error() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        assert_eq!(app_errors(errors), vec![AppError::NotFound]);
    }

    #[test]
    fn test_app_errors_empty_set() {
        assert!(app_errors(Errors::default()).is_empty());
    }
}
