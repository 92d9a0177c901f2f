use super::send_message::SendMessageUseCase;
use crate::notification::send::send_push;
use crate::shared::usecase::Subscriber;
use carebridge_domain::{ChatMessage, PushPayload};
use carebridge_infra::AppContext;
use tracing::{error, warn};

pub struct NotifyReceiverOnMessageSent;

#[async_trait::async_trait(?Send)]
impl Subscriber<SendMessageUseCase> for NotifyReceiverOnMessageSent {
    async fn notify(&self, message: &ChatMessage, ctx: &AppContext) {
        let sender = match ctx.repos.users.find(&message.sender_id).await {
            Some(sender) => sender,
            None => {
                warn!("Sender: {} of message no longer exists", message.sender_id);
                return;
            }
        };
        let room = match ctx.repos.chat_rooms.find(&message.room_id).await {
            Some(room) => room,
            None => {
                warn!("Chat room: {} of message no longer exists", message.room_id);
                return;
            }
        };
        let receiver_id = match room.other_member(&message.sender_id) {
            Some(receiver_id) => receiver_id.clone(),
            None => return,
        };

        let payload = PushPayload::Message {
            chat_room_id: room.id.clone(),
            sender: (&sender).into(),
            message_preview: message.preview(),
        };

        // Sideeffect, a failed push never rolls the message back
        if let Err(e) = send_push(&receiver_id, &sender.name, &message.preview(), payload, ctx).await
        {
            error!(
                "Unable to notify receiver: {} of new message in room: {}. Err: {:?}",
                receiver_id, room.id, e
            );
        }
    }
}
