use super::navigation::NavigationMessageContext;
use super::utility_types::{DocumentSnapshot, Viewport};
use crate::consts::MAX_UNDO_HISTORY_LEN;
use crate::messages::prelude::*;

use maquette_scene::{CoordinateSystem, Object, ObjectId, ObjectInfo, Scene};

pub struct DocumentMessageContext<'a> {
	pub ipp: &'a InputPreprocessorMessageHandler,
	pub preferences: &'a PreferencesMessageHandler,
}

/// Owns the scene, the selection, the viewport, and the snapshot-based undo history.
#[derive(Debug)]
pub struct DocumentMessageHandler {
	scene: Scene,
	selected: Vec<ObjectId>,
	viewport: Viewport,
	navigation_handler: NavigationMessageHandler,
	undo_history: VecDeque<DocumentSnapshot>,
	redo_history: VecDeque<DocumentSnapshot>,
	/// Sequence number for default box names, starting at "Box 1".
	box_counter: u64,
	dirty: bool,
}

impl Default for DocumentMessageHandler {
	fn default() -> Self {
		Self {
			scene: Scene::new(),
			selected: Vec::new(),
			viewport: Viewport::default(),
			navigation_handler: NavigationMessageHandler::default(),
			undo_history: VecDeque::new(),
			redo_history: VecDeque::new(),
			box_counter: 1,
			dirty: false,
		}
	}
}

impl<'a> MessageHandler<DocumentMessage, DocumentMessageContext<'a>> for DocumentMessageHandler {
	fn process_message(&mut self, message: DocumentMessage, responses: &mut VecDeque<Message>, context: DocumentMessageContext<'a>) {
		match message {
			// Sub-messages
			DocumentMessage::Navigation(message) => {
				let context = NavigationMessageContext {
					scene: &mut self.scene,
					viewport: &mut self.viewport,
					ipp: context.ipp,
					preferences: context.preferences,
				};
				self.navigation_handler.process_message(message, responses, context);
			}

			// Messages
			DocumentMessage::AbortTransaction => {
				let Some(snapshot) = self.undo_history.pop_back() else {
					log::warn!("tried to abort a transaction but no transaction is open");
					return;
				};
				self.restore_snapshot(snapshot, responses);
			}
			DocumentMessage::AddBox { id } => {
				let name = format!("Box {}", self.box_counter);
				let info = ObjectInfo::new(id, name, Object::unit_box(), CoordinateSystem::default());
				if let Err(error) = self.scene.add_object(info) {
					log::error!("AddBox failed: {error}");
					return;
				}
				self.box_counter += 1;

				self.selected = vec![id];
				responses.add(FrontendMessage::UpdateSelection { objects: self.selected.clone() });
				responses.add(BroadcastEvent::SelectionChanged);
				self.mark_dirty(responses);
			}
			DocumentMessage::BindViewportCamera { camera } => match self.bind_viewport_camera(camera) {
				Ok(()) => responses.add(FrontendMessage::RefreshViewport),
				Err(error) => log::error!("BindViewportCamera failed: {error}"),
			},
			DocumentMessage::CommitTransaction => (),
			DocumentMessage::Redo => {
				let Some(snapshot) = self.redo_history.pop_back() else { return };
				let replaced = self.current_snapshot();
				self.undo_history.push_back(replaced);
				if self.undo_history.len() > MAX_UNDO_HISTORY_LEN {
					self.undo_history.pop_front();
				}

				self.restore_snapshot(snapshot, responses);
			}
			DocumentMessage::ResizeBox { id, size } => {
				let Some(info) = self.scene.object_mut(id) else {
					log::error!("ResizeBox: no object with id {id:?}");
					return;
				};
				let Object::Box { size: box_size } = &mut info.object else {
					log::error!("ResizeBox: object {id:?} is not a box");
					return;
				};
				*box_size = size;
				self.mark_dirty(responses);
			}
			DocumentMessage::SetObjectCoords { id, origin, z_direction, up_direction } => {
				let Some(info) = self.scene.object_mut(id) else {
					log::error!("SetObjectCoords: no object with id {id:?}");
					return;
				};
				info.coords.set_origin(origin);
				info.coords.set_orientation(z_direction, up_direction);
				self.mark_dirty(responses);
			}
			DocumentMessage::SetSelection { objects } => {
				self.selected = objects.into_iter().filter(|&id| self.scene.contains(id)).collect();
				responses.add(FrontendMessage::UpdateSelection { objects: self.selected.clone() });
				responses.add(BroadcastEvent::SelectionChanged);
			}
			DocumentMessage::StartTransaction => self.backup(),
			DocumentMessage::Undo => {
				let Some(snapshot) = self.undo_history.pop_back() else { return };
				let replaced = self.current_snapshot();
				self.redo_history.push_back(replaced);
				if self.redo_history.len() > MAX_UNDO_HISTORY_LEN {
					self.redo_history.pop_front();
				}

				self.restore_snapshot(snapshot, responses);
			}
		}
	}

	fn actions(&self) -> ActionList {
		let mut common = actions!(DocumentMessageDiscriminant;
			Undo,
			Redo,
		);
		common.extend(self.navigation_handler.actions());
		common
	}
}

impl DocumentMessageHandler {
	pub fn scene(&self) -> &Scene {
		&self.scene
	}

	pub fn viewport(&self) -> &Viewport {
		&self.viewport
	}

	pub fn selected_objects(&self) -> &[ObjectId] {
		&self.selected
	}

	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	#[cfg(test)]
	pub(crate) fn scene_mut(&mut self) -> &mut Scene {
		&mut self.scene
	}

	/// Point the viewport through a camera object in the scene, or detach it again with `None`.
	fn bind_viewport_camera(&mut self, camera: Option<ObjectId>) -> Result<(), EditorError> {
		if let Some(id) = camera {
			let info = self.scene.object(id).ok_or(EditorError::UnknownObject(id))?;
			if !info.object.is_camera() {
				return Err(EditorError::NotACamera(id));
			}
			self.viewport.camera.set_coordinates(info.coords.clone());
		}
		self.viewport.bound_camera = camera;
		Ok(())
	}

	/// Capture the current scene and selection as the next undo step, clearing the redo history.
	pub fn backup(&mut self) {
		self.redo_history.clear();
		let snapshot = self.current_snapshot();
		self.undo_history.push_back(snapshot);
		if self.undo_history.len() > MAX_UNDO_HISTORY_LEN {
			self.undo_history.pop_front();
		}
	}

	fn current_snapshot(&self) -> DocumentSnapshot {
		DocumentSnapshot {
			scene: self.scene.clone(),
			selected: self.selected.clone(),
		}
	}

	fn restore_snapshot(&mut self, snapshot: DocumentSnapshot, responses: &mut VecDeque<Message>) {
		self.scene = snapshot.scene;
		self.selected = snapshot.selected;

		responses.add(FrontendMessage::UpdateSelection { objects: self.selected.clone() });
		responses.add(BroadcastEvent::SelectionChanged);
		self.mark_dirty(responses);
	}

	fn mark_dirty(&mut self, responses: &mut VecDeque<Message>) {
		if !self.dirty {
			self.dirty = true;
			responses.add(FrontendMessage::UpdateDocumentDirtyState { dirty: true });
		}
		responses.add(BroadcastEvent::DocumentIsDirty);
		responses.add(FrontendMessage::RefreshViewport);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use glam::DVec3;

	fn context<'a>(ipp: &'a InputPreprocessorMessageHandler, preferences: &'a PreferencesMessageHandler) -> DocumentMessageContext<'a> {
		DocumentMessageContext { ipp, preferences }
	}

	fn process(handler: &mut DocumentMessageHandler, message: DocumentMessage) -> VecDeque<Message> {
		let ipp = InputPreprocessorMessageHandler::default();
		let preferences = PreferencesMessageHandler::default();
		let mut responses = VecDeque::new();
		handler.process_message(message, &mut responses, context(&ipp, &preferences));
		responses
	}

	#[test]
	fn added_boxes_are_named_sequentially_and_selected() {
		let mut handler = DocumentMessageHandler::default();

		process(&mut handler, DocumentMessage::AddBox { id: ObjectId(10) });
		process(&mut handler, DocumentMessage::AddBox { id: ObjectId(11) });

		assert_eq!(handler.scene().object(ObjectId(10)).unwrap().name, "Box 1");
		assert_eq!(handler.scene().object(ObjectId(11)).unwrap().name, "Box 2");
		assert_eq!(handler.selected_objects(), &[ObjectId(11)]);
	}

	#[test]
	fn abort_transaction_removes_the_object_and_restores_selection() {
		let mut handler = DocumentMessageHandler::default();
		process(&mut handler, DocumentMessage::AddBox { id: ObjectId(1) });

		process(&mut handler, DocumentMessage::StartTransaction);
		process(&mut handler, DocumentMessage::AddBox { id: ObjectId(2) });
		assert_eq!(handler.selected_objects(), &[ObjectId(2)]);

		process(&mut handler, DocumentMessage::AbortTransaction);

		assert!(!handler.scene().contains(ObjectId(2)));
		assert_eq!(handler.selected_objects(), &[ObjectId(1)]);
	}

	#[test]
	fn undo_and_redo_walk_the_history() {
		let mut handler = DocumentMessageHandler::default();

		process(&mut handler, DocumentMessage::StartTransaction);
		process(&mut handler, DocumentMessage::AddBox { id: ObjectId(1) });
		process(&mut handler, DocumentMessage::CommitTransaction);

		process(&mut handler, DocumentMessage::Undo);
		assert!(handler.scene().is_empty());
		assert!(handler.selected_objects().is_empty());

		process(&mut handler, DocumentMessage::Redo);
		assert!(handler.scene().contains(ObjectId(1)));
		assert_eq!(handler.selected_objects(), &[ObjectId(1)]);
	}

	#[test]
	fn undo_with_empty_history_is_a_no_op() {
		let mut handler = DocumentMessageHandler::default();
		let responses = process(&mut handler, DocumentMessage::Undo);
		assert!(responses.is_empty());
	}

	#[test]
	fn resize_box_rejects_unknown_objects() {
		let mut handler = DocumentMessageHandler::default();
		process(&mut handler, DocumentMessage::ResizeBox { id: ObjectId(1), size: DVec3::ONE });
		assert!(handler.scene().is_empty());
	}

	#[test]
	fn resize_box_updates_the_size() {
		let mut handler = DocumentMessageHandler::default();
		process(&mut handler, DocumentMessage::AddBox { id: ObjectId(1) });

		process(
			&mut handler,
			DocumentMessage::ResizeBox {
				id: ObjectId(1),
				size: DVec3::new(2., 3., 2.),
			},
		);

		let info = handler.scene().object(ObjectId(1)).unwrap();
		assert_eq!(info.object, Object::Box { size: DVec3::new(2., 3., 2.) });
	}

	#[test]
	fn binding_the_viewport_requires_a_camera_object() {
		let mut handler = DocumentMessageHandler::default();
		let camera = ObjectInfo::new(
			ObjectId(5),
			"Camera 1",
			Object::Camera { fov: 45. },
			CoordinateSystem::new(DVec3::new(0., 2., -10.), DVec3::Z, DVec3::Y),
		);
		handler.scene_mut().add_object(camera).unwrap();
		process(&mut handler, DocumentMessage::AddBox { id: ObjectId(6) });

		// A box cannot be looked through
		process(&mut handler, DocumentMessage::BindViewportCamera { camera: Some(ObjectId(6)) });
		assert_eq!(handler.viewport().bound_camera, None);

		// Neither can an object that does not exist
		process(&mut handler, DocumentMessage::BindViewportCamera { camera: Some(ObjectId(99)) });
		assert_eq!(handler.viewport().bound_camera, None);

		// A scene camera can, and the viewport adopts its placement
		process(&mut handler, DocumentMessage::BindViewportCamera { camera: Some(ObjectId(5)) });
		assert_eq!(handler.viewport().bound_camera, Some(ObjectId(5)));
		assert_eq!(handler.viewport().camera.coordinates().origin(), DVec3::new(0., 2., -10.));

		process(&mut handler, DocumentMessage::BindViewportCamera { camera: None });
		assert_eq!(handler.viewport().bound_camera, None);
	}

	#[test]
	fn selection_is_filtered_to_objects_in_the_scene() {
		let mut handler = DocumentMessageHandler::default();
		process(&mut handler, DocumentMessage::AddBox { id: ObjectId(1) });

		process(
			&mut handler,
			DocumentMessage::SetSelection {
				objects: vec![ObjectId(1), ObjectId(99)],
			},
		);

		assert_eq!(handler.selected_objects(), &[ObjectId(1)]);
	}
}
