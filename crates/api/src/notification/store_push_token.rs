use crate::error::CarebridgeError;
use crate::shared::auth::protect_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use carebridge_api_structs::store_push_token::*;
use carebridge_domain::{PushToken, ID};
use carebridge_infra::AppContext;

pub async fn store_push_token_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse, CarebridgeError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = StorePushTokenUseCase {
        user_id: user.id,
        token: body.token,
        device_id: body.device_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new()))
        .map_err(CarebridgeError::from)
}

/// Registers the device's push token. Upsert by device id: a device
/// re-registering replaces its token, it never grows a second row.
#[derive(Debug)]
pub struct StorePushTokenUseCase {
    pub user_id: ID,
    pub token: String,
    pub device_id: String,
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
impl UseCase for StorePushTokenUseCase {
    type Response = PushToken;

    type Error = UseCaseError;

    const NAME: &'static str = "StorePushToken";

    async fn execute(&mut self, ctx: &AppContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.push_tokens.find_by_device(&self.device_id).await {
            Some(mut existing) => {
                existing.token = self.token.clone();
                ctx.repos
                    .push_tokens
                    .save(&existing)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                Ok(existing)
            }
            None => {
                let token = PushToken {
                    id: Default::default(),
                    user_id: self.user_id.clone(),
                    token: self.token.clone(),
                    device_id: self.device_id.clone(),
                };
                ctx.repos
                    .push_tokens
                    .insert(&token)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
                Ok(token)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use carebridge_infra::setup_context_inmemory;

    #[actix_web::test]
    async fn reregistering_a_device_replaces_its_token() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();

        let usecase = StorePushTokenUseCase {
            user_id: user_id.clone(),
            token: "tok-old".into(),
            device_id: "phone-1".into(),
        };
        execute(usecase, &ctx).await.unwrap();

        let usecase = StorePushTokenUseCase {
            user_id: user_id.clone(),
            token: "tok-new".into(),
            device_id: "phone-1".into(),
        };
        execute(usecase, &ctx).await.unwrap();

        let tokens = ctx.repos.push_tokens.find_by_user(&user_id).await;
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token, "tok-new");
    }

    #[actix_web::test]
    async fn a_user_can_register_many_devices() {
        let ctx = setup_context_inmemory();
        let user_id = ID::new();

        for (token, device) in [("tok-1", "phone"), ("tok-2", "tablet")] {
            let usecase = StorePushTokenUseCase {
                user_id: user_id.clone(),
                token: token.into(),
                device_id: device.into(),
            };
            execute(usecase, &ctx).await.unwrap();
        }

        assert_eq!(ctx.repos.push_tokens.find_by_user(&user_id).await.len(), 2);
    }
}
