pub use crate::error::EditorError;
pub use crate::utility_traits::{ActionList, AsMessage, MessageHandler, Responses, ToDiscriminant, TransitiveChild};

pub use crate::messages::broadcast::broadcast_event::{BroadcastEvent, BroadcastEventDiscriminant};
pub use crate::messages::broadcast::{BroadcastMessage, BroadcastMessageDiscriminant, BroadcastMessageHandler};
pub use crate::messages::debug::{DebugMessage, DebugMessageDiscriminant, DebugMessageHandler};
pub use crate::messages::document::navigation::{NavigationMessage, NavigationMessageDiscriminant, NavigationMessageHandler};
pub use crate::messages::document::{DocumentMessage, DocumentMessageContext, DocumentMessageDiscriminant, DocumentMessageHandler};
pub use crate::messages::frontend::{FrontendMessage, FrontendMessageDiscriminant};
pub use crate::messages::input_mapper::{InputMapperMessage, InputMapperMessageDiscriminant, InputMapperMessageHandler};
pub use crate::messages::input_preprocessor::{InputPreprocessorMessage, InputPreprocessorMessageDiscriminant, InputPreprocessorMessageHandler};
pub use crate::messages::message::{Message, MessageDiscriminant};
pub use crate::messages::preferences::{PreferencesMessage, PreferencesMessageDiscriminant, PreferencesMessageHandler};
pub use crate::messages::tool::tool_messages::box_tool::{BoxToolMessage, BoxToolMessageDiscriminant};
pub use crate::messages::tool::tool_messages::move_view_tool::{MoveViewToolMessage, MoveViewToolMessageDiscriminant};
pub use crate::messages::tool::{ToolMessage, ToolMessageDiscriminant, ToolMessageHandler};

pub use maquette_proc_macros::*;

pub use std::collections::{HashMap, HashSet, VecDeque};
