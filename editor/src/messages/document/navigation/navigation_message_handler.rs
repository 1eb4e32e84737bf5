use super::utility_types::ViewportDrag;
use crate::consts::{TRAVEL_FORWARD_RATE, TRAVEL_VERTICAL_RATE, VIEWPORT_ZOOM_DRAG_RATE, VIEWPORT_ZOOM_SCALE_MAX, VIEWPORT_ZOOM_SCALE_MIN};
use crate::messages::document::utility_types::{NavigationMode, Viewport};
use crate::messages::frontend::utility_types::MouseCursorIcon;
use crate::messages::input_mapper::utility_types::input_keyboard::Key;
use crate::messages::prelude::*;

use glam::{DMat4, DVec2, DVec3};
use maquette_scene::consts::BASE_VIEW_SCALE;
use maquette_scene::{ObjectId, Scene};

pub struct NavigationMessageContext<'a> {
	pub scene: &'a mut Scene,
	pub viewport: &'a mut Viewport,
	pub ipp: &'a InputPreprocessorMessageHandler,
	pub preferences: &'a PreferencesMessageHandler,
}

/// Turns pointer motion into camera motion, dispatching on the active navigation mode.
#[derive(Debug, Default)]
pub struct NavigationMessageHandler {
	drag: Option<ViewportDrag>,
}

impl<'a> MessageHandler<NavigationMessage, NavigationMessageContext<'a>> for NavigationMessageHandler {
	fn process_message(&mut self, message: NavigationMessage, responses: &mut VecDeque<Message>, context: NavigationMessageContext<'a>) {
		let NavigationMessageContext { scene, viewport, ipp, preferences } = context;

		match message {
			NavigationMessage::BeginViewportDrag { prefer_model_navigation } => {
				if self.drag.is_some() {
					log::warn!("BeginViewportDrag while a viewport drag is already in progress");
					return;
				}

				let camera = &viewport.camera;
				let click_point = ipp.mouse.position;
				let old_coords = camera.coordinates().clone();
				let drag = ViewportDrag {
					click_point,
					click_world: camera.screen_to_world(click_point, viewport.dist_to_plane),
					old_camera_position: old_coords.origin(),
					old_rotation_center: viewport.rotation_center,
					old_scale: viewport.scale,
					old_dist: viewport.dist_to_plane,
					zoom_or_travel: ipp.keyboard.key(Key::Control),
					active_mode: if prefer_model_navigation {
						viewport.navigation_mode.model_equivalent()
					} else {
						viewport.navigation_mode
					},
					selected_mode: viewport.navigation_mode,
					transaction_open: viewport.bound_camera.is_some(),
					old_coords,
				};

				// The drag orbits and zooms about the point the camera is currently looking at
				viewport.rotation_center = drag.old_camera_position + drag.old_coords.z_direction() * drag.old_dist;
				viewport.navigation_mode = drag.active_mode;

				// Dragging a viewport that looks through a scene camera moves that camera, which must be undoable
				if drag.transaction_open {
					responses.add(DocumentMessage::StartTransaction);
				}
				responses.add(FrontendMessage::UpdateMouseCursor { cursor: MouseCursorIcon::Grabbing });

				self.drag = Some(drag);
			}
			NavigationMessage::PointerMove { constrain_axis } => {
				let Some(drag) = &self.drag else { return };

				let mut dx = ipp.mouse.position.x - drag.click_point.x;
				let mut dy = ipp.mouse.position.y - drag.click_point.y;

				if drag.active_mode.is_travel() {
					if drag.zoom_or_travel {
						Self::travel_forward(viewport, drag, dy);
					} else {
						if ipp.keyboard.key(constrain_axis) {
							if dx.abs() > dy.abs() { dy = 0. } else { dx = 0. }
						}
						Self::travel_strafe(viewport, drag, dx, dy);
					}
				} else if drag.zoom_or_travel {
					Self::model_zoom(viewport, drag, dy);
				} else {
					if ipp.keyboard.key(constrain_axis) {
						if dx.abs() > dy.abs() { dy = 0. } else { dx = 0. }
					}
					Self::model_pan(viewport, drag, dx, dy);
				}

				Self::sync_bound_camera(scene, viewport);
				responses.add(FrontendMessage::RefreshViewport);
			}
			NavigationMessage::EndViewportDrag { abort } => {
				let Some(drag) = self.drag.take() else { return };

				viewport.navigation_mode = drag.selected_mode;

				if abort {
					viewport.camera.set_coordinates(drag.old_coords.clone());
					viewport.rotation_center = drag.old_rotation_center;
					viewport.dist_to_plane = drag.old_dist;
					if viewport.scale != drag.old_scale {
						viewport.scale = drag.old_scale;
						if !viewport.camera.is_perspective() {
							let viewport_size = viewport.camera.viewport_size();
							viewport.camera.set_screen_params_parallel(drag.old_scale, viewport_size);
						}
					}
					if drag.transaction_open {
						responses.add(DocumentMessage::AbortTransaction);
					}
				} else if let Some(bound) = viewport.bound_camera {
					// The viewport looked through a scene camera: finalize its placement and carry
					// its children along by the same camera-space delta
					let new_coords = viewport.camera.coordinates().clone();
					if let Some(info) = scene.object_mut(bound) {
						info.coords = new_coords.clone();
					}
					let transform = new_coords.from_local() * drag.old_coords.to_local();
					Self::move_children(scene, bound, transform);

					if drag.transaction_open {
						responses.add(DocumentMessage::CommitTransaction);
					}
				}

				responses.add(FrontendMessage::RefreshViewport);
				responses.add(ToolMessage::UpdateCursor);
				responses.add(ToolMessage::UpdateHints);
			}
			NavigationMessage::SetNavigationMode { mode } => {
				if self.drag.is_some() {
					log::warn!("ignoring navigation mode change during a viewport drag");
					return;
				}

				viewport.navigation_mode = mode;

				// Travel navigation is only meaningful with a perspective projection
				if mode.is_travel() && !viewport.camera.is_perspective() {
					let viewport_size = viewport.camera.viewport_size();
					let scale = viewport.camera.scale();
					viewport.camera.set_screen_params(viewport_size, scale);
				}
				responses.add(FrontendMessage::RefreshViewport);
			}
			NavigationMessage::ViewportResized => {
				viewport.camera.set_viewport_size(ipp.viewport_bounds.size());
				responses.add(FrontendMessage::RefreshViewport);
			}
			NavigationMessage::WheelZoom => {
				if viewport.camera.viewport_size() == DVec2::ZERO {
					log::warn!("cannot zoom a viewport of size zero");
					return;
				}
				let scroll = ipp.mouse.scroll_delta.scroll_delta();
				if scroll == 0. {
					return;
				}

				let mut zoom_factor = 1. + scroll.abs() * preferences.viewport_zoom_wheel_rate;
				let zoom_in = (ipp.mouse.scroll_delta.y < 0) != preferences.reverse_wheel_zoom;
				if !zoom_in {
					zoom_factor = 1. / zoom_factor;
				}

				if viewport.camera.is_perspective() {
					viewport.dist_to_plane /= zoom_factor;
				} else {
					let new_scale = (viewport.scale * zoom_factor).clamp(VIEWPORT_ZOOM_SCALE_MIN, VIEWPORT_ZOOM_SCALE_MAX);
					viewport.scale = new_scale;
					let viewport_size = viewport.camera.viewport_size();
					viewport.camera.set_screen_params_parallel(new_scale, viewport_size);
					viewport.dist_to_plane = viewport.camera.dist_to_screen() * BASE_VIEW_SCALE / new_scale;
				}

				let mut coords = viewport.camera.coordinates().clone();
				coords.set_origin(viewport.rotation_center - coords.z_direction() * viewport.dist_to_plane);
				viewport.camera.set_coordinates(coords);

				Self::sync_bound_camera(scene, viewport);
				responses.add(FrontendMessage::RefreshViewport);
			}
		}
	}

	fn actions(&self) -> ActionList {
		let mut common = actions!(NavigationMessageDiscriminant;
			SetNavigationMode,
			WheelZoom,
		);

		if self.drag.is_some() {
			let dragging = actions!(NavigationMessageDiscriminant;
				PointerMove,
				EndViewportDrag,
			);
			common.extend(dragging);
		}

		common
	}
}

impl NavigationMessageHandler {
	pub fn is_dragging(&self) -> bool {
		self.drag.is_some()
	}

	/// Model-mode pan: the scene point grabbed at press time follows the cursor.
	fn model_pan(viewport: &mut Viewport, drag: &ViewportDrag, dx: f64, dy: f64) {
		let mut movement = viewport.camera.drag_vector(drag.click_world, dx, dy);
		if viewport.camera.is_perspective() {
			movement *= drag.old_dist / viewport.dist_to_plane;
		}

		let mut coords = drag.old_coords.clone();
		coords.transform_origin(DMat4::from_translation(-movement));
		viewport.rotation_center = coords.origin() + coords.z_direction() * drag.old_dist;
		viewport.camera.set_coordinates(coords);
	}

	/// Model-mode zoom: vertical drag scales the distance to the rotation center.
	fn model_zoom(viewport: &mut Viewport, drag: &ViewportDrag, dy: f64) {
		if viewport.camera.is_perspective() {
			viewport.dist_to_plane = drag.old_dist * VIEWPORT_ZOOM_DRAG_RATE.powf(-dy);
		} else {
			let new_scale = (drag.old_scale * VIEWPORT_ZOOM_DRAG_RATE.powf(dy)).clamp(VIEWPORT_ZOOM_SCALE_MIN, VIEWPORT_ZOOM_SCALE_MAX);
			viewport.scale = new_scale;
			let viewport_size = viewport.camera.viewport_size();
			viewport.camera.set_screen_params_parallel(new_scale, viewport_size);
			viewport.dist_to_plane = viewport.camera.dist_to_screen() * BASE_VIEW_SCALE / new_scale;
		}

		let mut coords = drag.old_coords.clone();
		coords.set_origin(viewport.rotation_center - coords.z_direction() * viewport.dist_to_plane);
		viewport.camera.set_coordinates(coords);
	}

	/// Travel-mode forward motion along the facing direction (kept horizontal in landscape mode).
	fn travel_forward(viewport: &mut Viewport, drag: &ViewportDrag, dy: f64) {
		let z_dir = drag.old_coords.z_direction();
		let heading = if drag.active_mode == NavigationMode::TravelLandscape {
			DVec3::new(z_dir.x, 0., z_dir.z).try_normalize().unwrap_or(z_dir)
		} else {
			z_dir
		};

		let new_position = drag.old_camera_position + heading * (-dy * TRAVEL_FORWARD_RATE * drag.old_dist / viewport.camera.dist_to_screen());
		let mut coords = drag.old_coords.clone();
		coords.set_origin(new_position);
		viewport.rotation_center = new_position + coords.z_direction() * drag.old_dist;
		viewport.camera.set_coordinates(coords);
	}

	/// Travel-mode strafe: horizontal motion in the ground plane plus a vertical offset
	/// (world-vertical in landscape mode, camera-up otherwise).
	fn travel_strafe(viewport: &mut Viewport, drag: &ViewportDrag, dx: f64, dy: f64) {
		let vertical_dir = if drag.active_mode == NavigationMode::TravelLandscape {
			DVec3::Y
		} else {
			drag.old_coords.up_direction()
		};

		let horizontal_move = viewport.camera.drag_vector(drag.click_world, dx, 0.);
		let mut coords = drag.old_coords.clone();
		coords.transform_origin(DMat4::from_translation(DVec3::new(-horizontal_move.x, 0., -horizontal_move.z)));

		let new_position = coords.origin() + vertical_dir * (dy * TRAVEL_VERTICAL_RATE * viewport.dist_to_plane / viewport.camera.dist_to_screen());
		coords.set_origin(new_position);
		viewport.rotation_center = new_position + coords.z_direction() * viewport.dist_to_plane;
		viewport.camera.set_coordinates(coords);
	}

	/// Keep the bound scene camera's placement in step with the viewport camera.
	fn sync_bound_camera(scene: &mut Scene, viewport: &Viewport) {
		let Some(bound) = viewport.bound_camera else { return };
		let Some(info) = scene.object_mut(bound) else {
			log::error!("viewport is bound to camera {bound:?} which is not in the scene");
			return;
		};
		info.coords = viewport.camera.coordinates().clone();
	}

	/// Carry the children of a moved camera along by the camera's own delta, recursively.
	fn move_children(scene: &mut Scene, parent: ObjectId, transform: DMat4) {
		let children = scene.object(parent).map(|info| info.children.clone()).unwrap_or_default();
		for child in children {
			if let Some(info) = scene.object_mut(child) {
				info.coords.transform_coordinates(transform);
			}
			Self::move_children(scene, child, transform);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::messages::input_mapper::utility_types::input_mouse::ScrollDelta;
	use maquette_scene::consts::DEFAULT_DIST_TO_SCREEN;
	use maquette_scene::{CoordinateSystem, Object, ObjectInfo};

	const EPSILON: f64 = 1e-9;

	fn viewport(perspective: bool) -> Viewport {
		let mut viewport = Viewport::default();
		let size = DVec2::new(800., 600.);
		if perspective {
			viewport.camera.set_screen_params(size, BASE_VIEW_SCALE);
		} else {
			viewport.camera.set_screen_params_parallel(BASE_VIEW_SCALE, size);
		}
		viewport
	}

	fn process(
		handler: &mut NavigationMessageHandler,
		scene: &mut Scene,
		viewport: &mut Viewport,
		ipp: &InputPreprocessorMessageHandler,
		message: NavigationMessage,
	) -> VecDeque<Message> {
		let preferences = PreferencesMessageHandler::default();
		let mut responses = VecDeque::new();
		let context = NavigationMessageContext {
			scene,
			viewport,
			ipp,
			preferences: &preferences,
		};
		handler.process_message(message, &mut responses, context);
		responses
	}

	fn begin_drag(handler: &mut NavigationMessageHandler, scene: &mut Scene, viewport: &mut Viewport, ipp: &mut InputPreprocessorMessageHandler, at: DVec2) {
		ipp.mouse.position = at;
		process(handler, scene, viewport, ipp, NavigationMessage::BeginViewportDrag { prefer_model_navigation: true });
	}

	fn drag_to(handler: &mut NavigationMessageHandler, scene: &mut Scene, viewport: &mut Viewport, ipp: &mut InputPreprocessorMessageHandler, to: DVec2) {
		ipp.mouse.position = to;
		process(handler, scene, viewport, ipp, NavigationMessage::PointerMove { constrain_axis: Key::Shift });
	}

	#[test]
	fn model_pan_moves_the_camera_against_the_drag() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = viewport(false);
		let mut ipp = InputPreprocessorMessageHandler::default();

		begin_drag(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 300.));
		drag_to(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(500., 300.));

		// 100 px right at 100 px/unit pans the scene one unit right, so the camera goes one unit left
		let origin = viewport.camera.coordinates().origin();
		assert!((origin - DVec3::new(-1., 0., 0.)).length() < EPSILON);
		// The rotation center stays on the view axis at the captured depth
		assert!((viewport.rotation_center - DVec3::new(-1., 0., 20.)).length() < EPSILON);
	}

	#[test]
	fn axis_constraint_drops_the_smaller_delta() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = viewport(false);
		let mut ipp = InputPreprocessorMessageHandler::default();

		begin_drag(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 300.));
		ipp.keyboard.set(Key::Shift as usize);
		drag_to(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(500., 340.));

		let origin = viewport.camera.coordinates().origin();
		assert!((origin - DVec3::new(-1., 0., 0.)).length() < EPSILON);
	}

	#[test]
	fn control_drag_zooms_in_perspective() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = viewport(true);
		let mut ipp = InputPreprocessorMessageHandler::default();

		ipp.keyboard.set(Key::Control as usize);
		begin_drag(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 300.));
		drag_to(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 400.));

		let expected_dist = 20. * VIEWPORT_ZOOM_DRAG_RATE.powf(-100.);
		assert!((viewport.dist_to_plane - expected_dist).abs() < EPSILON);
		// The camera backs along its own axis so the rotation center stays put
		let origin = viewport.camera.coordinates().origin();
		assert!((origin - DVec3::new(0., 0., 20. - expected_dist)).length() < EPSILON);
	}

	#[test]
	fn control_drag_zooms_the_scale_in_parallel_projection() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = viewport(false);
		let mut ipp = InputPreprocessorMessageHandler::default();

		ipp.keyboard.set(Key::Control as usize);
		begin_drag(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 300.));
		drag_to(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 350.));

		let expected_scale = BASE_VIEW_SCALE * VIEWPORT_ZOOM_DRAG_RATE.powf(50.);
		assert!((viewport.scale - expected_scale).abs() < 1e-6);
		assert!((viewport.camera.scale() - expected_scale).abs() < 1e-6);
		let expected_dist = DEFAULT_DIST_TO_SCREEN * BASE_VIEW_SCALE / expected_scale;
		assert!((viewport.dist_to_plane - expected_dist).abs() < 1e-6);
	}

	#[test]
	fn travel_forward_moves_along_the_facing_direction() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = viewport(true);
		viewport.navigation_mode = NavigationMode::TravelSpace;
		let mut ipp = InputPreprocessorMessageHandler::default();

		ipp.keyboard.set(Key::Control as usize);
		ipp.mouse.position = DVec2::new(400., 300.);
		process(&mut handler, &mut scene, &mut viewport, &ipp, NavigationMessage::BeginViewportDrag { prefer_model_navigation: false });
		// Dragging up advances the camera forward
		drag_to(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 200.));

		let origin = viewport.camera.coordinates().origin();
		let expected = 100. * TRAVEL_FORWARD_RATE * 20. / DEFAULT_DIST_TO_SCREEN;
		assert!((origin - DVec3::new(0., 0., expected)).length() < EPSILON);
	}

	#[test]
	fn travel_landscape_keeps_forward_motion_horizontal() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = viewport(true);
		viewport.navigation_mode = NavigationMode::TravelLandscape;
		// Look diagonally down at 45 degrees
		let coords = CoordinateSystem::new(DVec3::ZERO, DVec3::new(0., -1., 1.), DVec3::Y);
		viewport.camera.set_coordinates(coords);
		let mut ipp = InputPreprocessorMessageHandler::default();

		ipp.keyboard.set(Key::Control as usize);
		ipp.mouse.position = DVec2::new(400., 300.);
		process(&mut handler, &mut scene, &mut viewport, &ipp, NavigationMessage::BeginViewportDrag { prefer_model_navigation: false });
		drag_to(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 200.));

		let origin = viewport.camera.coordinates().origin();
		assert!(origin.y.abs() < EPSILON, "landscape travel must not change the camera height, got {origin:?}");
		assert!(origin.z > 0.);
	}

	#[test]
	fn tool_driven_drags_fall_back_to_model_navigation() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = viewport(true);
		viewport.navigation_mode = NavigationMode::TravelSpace;
		let mut ipp = InputPreprocessorMessageHandler::default();

		begin_drag(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 300.));
		assert_eq!(viewport.navigation_mode, NavigationMode::ModelSpace);
		drag_to(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(500., 300.));

		// A model pan moves the camera sideways; forward travel would move it along +z
		let origin = viewport.camera.coordinates().origin();
		assert!(origin.z.abs() < EPSILON);
		assert!(origin.x < 0.);

		process(&mut handler, &mut scene, &mut viewport, &ipp, NavigationMessage::EndViewportDrag { abort: false });
		assert_eq!(viewport.navigation_mode, NavigationMode::TravelSpace);
	}

	#[test]
	fn aborting_a_drag_restores_the_view() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = viewport(false);
		let mut ipp = InputPreprocessorMessageHandler::default();
		let before = viewport.camera.clone();

		begin_drag(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(400., 300.));
		drag_to(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(640., 120.));
		process(&mut handler, &mut scene, &mut viewport, &ipp, NavigationMessage::EndViewportDrag { abort: true });

		assert_eq!(viewport.camera, before);
		assert_eq!(viewport.dist_to_plane, 20.);
	}

	#[test]
	fn bound_camera_follows_the_drag_and_carries_children() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut camera_object = ObjectInfo::new(ObjectId(1), "Camera 1", Object::Camera { fov: 45. }, CoordinateSystem::default());
		camera_object.children.push(ObjectId(2));
		scene.add_object(camera_object).unwrap();
		let child = ObjectInfo::new(ObjectId(2), "Box 1", Object::unit_box(), CoordinateSystem::new(DVec3::new(0., 0., 1.), DVec3::Z, DVec3::Y));
		scene.add_object(child).unwrap();

		let mut viewport = viewport(false);
		viewport.bound_camera = Some(ObjectId(1));
		let mut ipp = InputPreprocessorMessageHandler::default();

		let responses = {
			ipp.mouse.position = DVec2::new(400., 300.);
			process(&mut handler, &mut scene, &mut viewport, &ipp, NavigationMessage::BeginViewportDrag { prefer_model_navigation: true })
		};
		assert!(responses.contains(&DocumentMessage::StartTransaction.into()));

		drag_to(&mut handler, &mut scene, &mut viewport, &mut ipp, DVec2::new(500., 300.));
		let responses = process(&mut handler, &mut scene, &mut viewport, &ipp, NavigationMessage::EndViewportDrag { abort: false });
		assert!(responses.contains(&DocumentMessage::CommitTransaction.into()));

		let camera_coords = scene.object(ObjectId(1)).unwrap().coords.clone();
		assert!((camera_coords.origin() - DVec3::new(-1., 0., 0.)).length() < EPSILON);
		let child_origin = scene.object(ObjectId(2)).unwrap().coords.origin();
		assert!((child_origin - DVec3::new(-1., 0., 1.)).length() < EPSILON);
	}

	#[test]
	fn wheel_zoom_scales_a_parallel_view() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = viewport(false);
		let mut ipp = InputPreprocessorMessageHandler::default();
		ipp.mouse.scroll_delta = ScrollDelta::new(0, -100, 0);

		process(&mut handler, &mut scene, &mut viewport, &ipp, NavigationMessage::WheelZoom);

		// Scrolling up zooms in: larger scale, smaller editing-plane depth
		assert!(viewport.scale > BASE_VIEW_SCALE);
		assert!(viewport.dist_to_plane < 20.);
	}

	#[test]
	fn wheel_zoom_refuses_a_zero_sized_viewport() {
		let mut handler = NavigationMessageHandler::default();
		let mut scene = Scene::new();
		let mut viewport = Viewport::default();
		let mut ipp = InputPreprocessorMessageHandler::default();
		ipp.mouse.scroll_delta = ScrollDelta::new(0, -100, 0);
		let before = viewport.clone();

		process(&mut handler, &mut scene, &mut viewport, &ipp, NavigationMessage::WheelZoom);

		assert_eq!(viewport, before);
	}
}
