use super::place_call::PlaceCallUseCase;
use crate::notification::send::send_push;
use crate::shared::usecase::Subscriber;
use carebridge_domain::{OngoingCall, PushPayload};
use carebridge_infra::AppContext;
use tracing::error;

pub struct NotifyReceiverOnCallPlaced;

#[async_trait::async_trait(?Send)]
impl Subscriber<PlaceCallUseCase> for NotifyReceiverOnCallPlaced {
    async fn notify(&self, call: &OngoingCall, ctx: &AppContext) {
        let payload = PushPayload::Call {
            call_id: call.id.clone(),
            channel_name: call.channel_name.clone(),
            caller: call.caller.clone(),
        };
        let body = format!("{} is calling you", call.caller.name);

        // Sideeffect, a failed push never rolls the call back
        if let Err(e) = send_push(&call.receiver.id, "Incoming Call", &body, payload, ctx).await {
            error!(
                "Unable to notify receiver: {} of incoming call: {}. Err: {:?}",
                call.receiver.id, call.id, e
            );
        }
    }
}
