// Logging module
// Conversation turn logging (structured app logs go through tracing)

mod conversation_logger;

pub use conversation_logger::{ConversationLogger, TurnRecord};
