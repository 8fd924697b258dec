#[cfg(feature = "server")]
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::{ServerFnError, server, server_fn};
use linkshort_shared::apirequests::links::{CreateLinkRequest, CreateLinkResponse};

#[cfg(feature = "server")]
use crate::registry::{LinkRegistry, RegistryError};
#[cfg(feature = "server")]
use linkshort_shared::validate::{validate_slug, validate_target};

/// Create a short link for `request.target` under `request.slug`.
///
/// # Errors
/// Fails with [`ServerFnError`] if the slug or the destination are invalid. A slug
/// that is already taken is answered with `data == false` instead.
#[server(CreateLink, endpoint = "create_link")]
pub async fn create_link(request: CreateLinkRequest) -> Result<CreateLinkResponse, ServerFnError> {
    register_link(crate::registry::get_registry(), &request)
}

#[cfg(feature = "server")]
pub(crate) fn register_link(
    registry: &LinkRegistry,
    request: &CreateLinkRequest,
) -> Result<CreateLinkResponse, ServerFnError> {
    info!("Creating link {:?} -> {:?}", request.slug, request.target);
    validate_slug(&request.slug).map_err(|e| {
        info!("Rejected slug {:?}: {}", request.slug, e);
        ServerFnError::new(e.to_string())
    })?;
    let target = validate_target(&request.target).map_err(|e| {
        info!("Rejected target {:?}: {}", request.target, e);
        ServerFnError::new(e.to_string())
    })?;
    match registry.register(&request.slug, &target) {
        Ok(()) => Ok(CreateLinkResponse::created(format!(
            "Link created: {}",
            request.slug
        ))),
        Err(RegistryError::SlugTaken) => {
            info!("Slug {:?} is already in use", request.slug);
            Ok(CreateLinkResponse::rejected(RegistryError::SlugTaken.to_string()))
        }
        Err(e) => {
            warn!("Failed to register {:?}: {}", request.slug, e);
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    fn request(slug: &str, target: &str) -> CreateLinkRequest {
        CreateLinkRequest {
            target: target.to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn valid_request_is_created() {
        let registry = LinkRegistry::default();
        let response = register_link(&registry, &request("mylink", "https://example.com"))
            .expect("valid request");
        assert!(response.data);
        assert_eq!(response.message, "Link created: mylink");
        assert_eq!(
            registry.target_of("mylink").as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn invalid_slug_is_an_error() {
        let registry = LinkRegistry::default();
        assert!(register_link(&registry, &request("abc", "https://example.com")).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn invalid_target_is_an_error() {
        let registry = LinkRegistry::default();
        assert!(register_link(&registry, &request("mylink", "not a url")).is_err());
        assert!(register_link(&registry, &request("mylink", "ftp://example.com")).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn taken_slug_is_answered_with_falsy_data() {
        let registry = LinkRegistry::default();
        register_link(&registry, &request("mylink", "https://one.example")).expect("free");
        let response = register_link(&registry, &request("mylink", "https://two.example"))
            .expect("answered");
        assert!(!response.data);
        assert_eq!(response.message, "Slug already in use");
    }

    #[tokio::test]
    async fn server_function_uses_the_process_registry() {
        let response = create_link(request("srvfn01", "https://example.com/x"))
            .await
            .expect("valid request");
        assert!(response.data);
        assert_eq!(
            crate::registry::get_registry().target_of("srvfn01").as_deref(),
            Some("https://example.com/x")
        );
    }
}
