use std::rc::Rc;

use crate::api::{ApiClient, ApiError, LoginRequest, UserResponse};

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<UserResponse, ApiError> {
        self.client.login(request).await
    }
}
