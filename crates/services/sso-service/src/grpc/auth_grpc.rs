//! gRPC implementation for the `sso.Auth` service.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::AuthService;
use proto::sso::{
    IsAdminRequest, IsAdminResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};
use proto::Auth;

/// gRPC service wrapper for AuthService.
pub struct AuthGrpcService {
    service: Arc<dyn AuthService>,
}

impl AuthGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn AuthService>) -> Self {
        Self { service }
    }
}

fn require_non_empty(value: &str, message: &'static str) -> Result<(), Status> {
    if value.is_empty() {
        return Err(Status::invalid_argument(message));
    }
    Ok(())
}

#[tonic::async_trait]
impl Auth for AuthGrpcService {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let req = request.into_inner();
        require_non_empty(&req.email, "email is required")?;
        require_non_empty(&req.password, "password is required")?;

        let user_id = self
            .service
            .register(req.email, req.password)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(RegisterResponse { user_id }))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let req = request.into_inner();
        require_non_empty(&req.email, "email is required")?;
        require_non_empty(&req.password, "password is required")?;
        if req.app_id == 0 {
            return Err(Status::invalid_argument("app_id is required"));
        }

        let token = self
            .service
            .login(req.email, req.password, req.app_id)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(LoginResponse { token }))
    }

    async fn is_admin(
        &self,
        request: Request<IsAdminRequest>,
    ) -> Result<Response<IsAdminResponse>, Status> {
        let req = request.into_inner();
        if req.user_id == 0 {
            return Err(Status::invalid_argument("user_id is required"));
        }

        let is_admin = self
            .service
            .is_admin(req.user_id)
            .await
            .map_err(Status::from)?;

        Ok(Response::new(IsAdminResponse { is_admin }))
    }
}
