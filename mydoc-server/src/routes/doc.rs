use crate::routes::{chat, health};
use utoipa::OpenApi;

#[derive(OpenApi)]
// `version` is left out so utoipa fills in CARGO_PKG_VERSION.
#[openapi(info(title = "mydoc-server", description = "MyDoc chat relay API"))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(chat::ChatApi::openapi());
    root
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn docs_list_every_route() {
        let doc = get_docs();
        for path in ["/", "/health", "/api/chat"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn docs_version_matches_crate() {
        assert_eq!(get_docs().info.version, env!("CARGO_PKG_VERSION"));
    }
}
