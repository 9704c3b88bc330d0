use super::repository::ContentRepository;
use crate::api::CmsClient;
use leptos::*;
use serde_json::{Map, Value};

#[derive(Clone)]
pub struct StorefrontViewModel {
    pub entry_fields: RwSignal<Map<String, Value>>,
    pub loading: RwSignal<bool>,
    pub fetch_action: Action<(), ()>,
}

pub fn use_storefront_view_model() -> StorefrontViewModel {
    let cms = use_context::<CmsClient>().unwrap_or_else(CmsClient::new);
    let repository = ContentRepository::new_with_client(std::rc::Rc::new(cms));

    let entry_fields = create_rw_signal(Map::new());
    let loading = create_rw_signal(true);

    let fetch_action = create_action(move |_: &()| {
        let repo = repository.clone();
        async move {
            loading.set(true);
            entry_fields.set(repo.home_entry_fields().await);
            loading.set(false);
        }
    });

    // Fetched fresh on every mount; nothing is cached.
    fetch_action.dispatch(());

    StorefrontViewModel {
        entry_fields,
        loading,
        fetch_action,
    }
}

/// Convenience accessor for string-typed entry fields.
pub fn field_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_text_reads_only_string_fields() {
        let mut fields = Map::new();
        fields.insert("title".into(), json!("Fresh drops"));
        fields.insert("count".into(), json!(3));

        assert_eq!(field_text(&fields, "title").as_deref(), Some("Fresh drops"));
        assert_eq!(field_text(&fields, "count"), None);
        assert_eq!(field_text(&fields, "missing"), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::config::{CmsMode, CmsSettings};
    use crate::test_support::ssr::with_local_runtime_async;
    use httpmock::prelude::*;

    fn settings() -> CmsSettings {
        CmsSettings {
            mode: CmsMode::Preview,
            space_id: "space-1".into(),
            delivery_token: "delivery-token".into(),
            preview_token: "preview-token".into(),
        }
    }

    #[test]
    fn storefront_view_model_loads_home_entry_fields() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET)
                    .path("/spaces/space-1/environments/master/entries/homePage");
                then.status(200).json_body(serde_json::json!({
                    "fields": { "title": "Fresh drops", "tagline": "Every week" }
                }));
            });

            let runtime = leptos::create_runtime();
            provide_context(CmsClient::new_with_base_url(server.base_url(), settings()));

            let vm = use_storefront_view_model();
            for _ in 0..50 {
                if !vm.loading.get() {
                    break;
                }
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            }

            assert!(!vm.loading.get());
            let fields = vm.entry_fields.get();
            assert_eq!(field_text(&fields, "title").as_deref(), Some("Fresh drops"));
            runtime.dispose();
        });
    }

    #[test]
    fn storefront_view_model_falls_back_to_empty_fields() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server.mock(|when, then| {
                when.method(GET)
                    .path("/spaces/space-1/environments/master/entries/homePage");
                then.status(200).body("not json at all");
            });

            let runtime = leptos::create_runtime();
            provide_context(CmsClient::new_with_base_url(server.base_url(), settings()));

            let vm = use_storefront_view_model();
            for _ in 0..50 {
                if !vm.loading.get() {
                    break;
                }
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            }

            assert!(!vm.loading.get());
            assert!(vm.entry_fields.get().is_empty());
            runtime.dispose();
        });
    }
}
