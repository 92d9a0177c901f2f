use carebridge_domain::{PushPayload, ID};
use carebridge_infra::{AppContext, PushMessage};
use tracing::{info, warn};

/// Delivers a notification to every device registered for `user_id`.
///
/// One delivery request goes out per token; a failing token does not
/// abort the rest of the batch. The call as a whole fails only when
/// tokens exist and none of them could be delivered to, so callers that
/// need retry semantics can distinguish "nothing registered" from
/// "delivery down".
pub async fn send_push(
    user_id: &ID,
    title: &str,
    body: &str,
    data: PushPayload,
    ctx: &AppContext,
) -> anyhow::Result<()> {
    let tokens = ctx.repos.push_tokens.find_by_user(user_id).await;
    if tokens.is_empty() {
        info!("No push tokens registered for user: {}", user_id);
        return Ok(());
    }

    let mut delivered = 0;
    for token in &tokens {
        let message = PushMessage::new(
            token.token.clone(),
            title.to_string(),
            body.to_string(),
            data.clone(),
        );
        match ctx.services.push.deliver(&message).await {
            Ok(()) => delivered += 1,
            Err(e) => warn!(
                "Push delivery to device: {} of user: {} failed: {:?}",
                token.device_id, user_id, e
            ),
        }
    }

    if delivered == 0 {
        return Err(anyhow::anyhow!(
            "All {} push deliveries failed for user: {}",
            tokens.len(),
            user_id
        ));
    }
    Ok(())
}
