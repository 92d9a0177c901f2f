use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::pick_role::*;
use carebridge_domain::{Role, User};
use carebridge_infra::AppContext;

pub async fn pick_role_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = PickRoleUseCase {
        user,
        role: body.0.role,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(CarebridgeError::from)
}

#[derive(Debug)]
pub struct PickRoleUseCase {
    pub user: User,
    pub role: Role,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for CarebridgeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for PickRoleUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "PickRole";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        let mut user = self.user.clone();
        user.role = Some(self.role);
        ctx.repos
            .users
            .save(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        Ok(user)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use carebridge_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn picking_a_role_persists_it() {
        let ctx = setup_context_inmemory();
        let user = User::new("Pat", "pat@example.com");
        ctx.repos.users.insert(&user).await.unwrap();

        let usecase = PickRoleUseCase {
            user: user.clone(),
            role: Role::Patient,
        };
        execute(usecase, &ctx).await.unwrap();

        let stored = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(stored.role, Some(Role::Patient));
    }
}
