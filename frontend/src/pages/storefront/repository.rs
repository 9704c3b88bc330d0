use std::rc::Rc;

use serde_json::{Map, Value};

use crate::{api::CmsClient, config};

#[derive(Clone)]
pub struct ContentRepository {
    client: Rc<CmsClient>,
}

impl ContentRepository {
    pub fn new_with_client(client: Rc<CmsClient>) -> Self {
        Self { client }
    }

    /// Fields of the storefront home entry; empty on any fetch failure.
    pub async fn home_entry_fields(&self) -> Map<String, Value> {
        self.client.entry_fields(&config::home_entry_id()).await
    }
}
