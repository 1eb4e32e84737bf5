use super::tool_prelude::*;
use crate::application::generate_uuid;

use maquette_scene::ObjectId;

#[derive(Default)]
pub struct BoxTool {
	fsm_state: BoxToolFsmState,
	tool_data: BoxToolData,
}

#[impl_message(Message, ToolMessage, BoxTool)]
#[derive(PartialEq, Eq, Clone, Debug, Hash, serde::Serialize, serde::Deserialize)]
pub enum BoxToolMessage {
	// Standard messages
	Abort,

	// Tool-specific messages
	DragStart,
	DragStop,
	Resize {
		constrain_square: Key,
	},
}

impl ToolMetadata for BoxTool {
	fn icon_name(&self) -> String {
		"GeometryBoxTool".into()
	}
	fn tooltip(&self) -> String {
		"Box Tool".into()
	}
	fn tool_type(&self) -> ToolType {
		ToolType::Box
	}
}

impl<'a> MessageHandler<ToolMessage, &mut ToolActionHandlerData<'a>> for BoxTool {
	fn process_message(&mut self, message: ToolMessage, responses: &mut VecDeque<Message>, handler_data: &mut ToolActionHandlerData<'a>) {
		self.fsm_state.process_event(message, &mut self.tool_data, handler_data, responses, true);
	}

	fn actions(&self) -> ActionList {
		use BoxToolFsmState::*;

		match self.fsm_state {
			Ready => actions!(BoxToolMessageDiscriminant;
				DragStart,
			),
			Drawing => actions!(BoxToolMessageDiscriminant;
				DragStop,
				Abort,
				Resize,
			),
		}
	}
}

impl ToolTransition for BoxTool {
	fn event_to_message_map(&self) -> EventToMessageMap {
		EventToMessageMap {
			tool_abort: Some(BoxToolMessage::Abort.into()),
			..Default::default()
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum BoxToolFsmState {
	#[default]
	Ready,
	Drawing,
}

#[derive(Clone, Debug, Default)]
struct BoxToolData {
	drag_start: DVec2,
	/// The object being sized by this drag. Created lazily on the first pointer movement, so a
	/// click with no drag leaves the scene untouched.
	object: Option<ObjectId>,
}

impl Fsm for BoxToolFsmState {
	type ToolData = BoxToolData;

	fn transition(self, event: ToolMessage, tool_data: &mut Self::ToolData, handler_data: &mut ToolActionHandlerData, responses: &mut VecDeque<Message>) -> Self {
		use BoxToolFsmState::*;
		use BoxToolMessage::*;

		let ToolMessage::BoxTool(event) = event else { return self };
		let ToolActionHandlerData { document, input } = handler_data;

		match (self, event) {
			(Ready, DragStart) => {
				tool_data.drag_start = input.mouse.position;
				tool_data.object = None;

				Drawing
			}
			(Drawing, Resize { constrain_square }) => {
				let mut drag_point = input.mouse.position;
				if tool_data.object.is_none() && drag_point == tool_data.drag_start {
					return Drawing;
				}

				if tool_data.object.is_none() {
					let id = ObjectId(generate_uuid());
					responses.add(DocumentMessage::StartTransaction);
					responses.add(DocumentMessage::AddBox { id });
					tool_data.object = Some(id);
				}
				let Some(id) = tool_data.object else { return Drawing };

				// Holding the constrain key forces the dragged face to a square, letting the
				// larger drag axis win
				let drag_start = tool_data.drag_start;
				if input.keyboard.key(constrain_square) {
					let delta = drag_point - drag_start;
					if delta.x.abs() > delta.y.abs() {
						drag_point.y = if delta.y < 0. { drag_start.y - delta.x.abs() } else { drag_start.y + delta.x.abs() };
					} else {
						drag_point.x = if delta.x < 0. { drag_start.x - delta.y.abs() } else { drag_start.x + delta.y.abs() };
					}
				}

				// The dragged rectangle spans the editing plane; its corners fix the box's frame
				let viewport = document.viewport();
				let camera = &viewport.camera;
				let v1 = camera.screen_to_world(drag_start, viewport.dist_to_plane);
				let v2 = camera.screen_to_world(DVec2::new(drag_point.x, drag_start.y), viewport.dist_to_plane);
				let v3 = camera.screen_to_world(drag_point, viewport.dist_to_plane);

				let origin = (v1 + v3) * 0.5;
				let x_dir = if drag_point.x < drag_start.x { v1 - v2 } else { v2 - v1 };
				let y_dir = if drag_point.y < drag_start.y { v3 - v2 } else { v2 - v3 };

				let x_size = x_dir.length();
				let y_size = y_dir.length();
				if x_size < f64::EPSILON || y_size < f64::EPSILON {
					return Drawing;
				}
				let x_dir = x_dir / x_size;
				let y_dir = y_dir / y_size;
				let z_dir = x_dir.cross(y_dir);
				// The depth matches the smaller of the two dragged-out face sizes
				let z_size = x_size.min(y_size);

				responses.add(DocumentMessage::ResizeBox {
					id,
					size: DVec3::new(x_size, y_size, z_size),
				});
				responses.add(DocumentMessage::SetObjectCoords {
					id,
					origin,
					z_direction: z_dir,
					up_direction: y_dir,
				});

				Drawing
			}
			(Drawing, DragStop) => {
				if tool_data.object.take().is_some() {
					responses.add(DocumentMessage::CommitTransaction);
				}

				Ready
			}
			(Drawing, Abort) => {
				if tool_data.object.take().is_some() {
					responses.add(DocumentMessage::AbortTransaction);
				}

				Ready
			}
			_ => self,
		}
	}

	fn update_hints(&self, responses: &mut VecDeque<Message>) {
		let hint_data = match self {
			BoxToolFsmState::Ready => HintData(vec![HintGroup(vec![
				HintInfo::mouse(MouseMotion::LmbDrag, "Draw Box"),
				HintInfo::keys([Key::Shift], "Constrain Square").prepend_plus(),
			])]),
			BoxToolFsmState::Drawing => HintData(vec![HintGroup(vec![HintInfo::keys([Key::Shift], "Constrain Square")])]),
		};

		responses.add(FrontendMessage::UpdateInputHints { hint_data });
	}

	fn update_cursor(&self, responses: &mut VecDeque<Message>) {
		responses.add(FrontendMessage::UpdateMouseCursor { cursor: MouseCursorIcon::Crosshair });
	}
}
