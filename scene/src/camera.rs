use crate::consts::{BASE_VIEW_SCALE, DEFAULT_DIST_TO_SCREEN};
use crate::coordinate_system::CoordinateSystem;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A viewport camera: a placement frame plus the projection onto the screen plane.
///
/// Screen coordinates are in pixels with the origin at the top left, so +y on screen points down
/// while +up in the camera frame points up. View-space depth increases along the camera's `z` axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
	coords: CoordinateSystem,
	viewport_size: DVec2,
	dist_to_screen: f64,
	scale: f64,
	perspective: bool,
}

impl Default for Camera {
	fn default() -> Self {
		Self {
			coords: CoordinateSystem::default(),
			viewport_size: DVec2::ZERO,
			dist_to_screen: DEFAULT_DIST_TO_SCREEN,
			scale: BASE_VIEW_SCALE,
			perspective: false,
		}
	}
}

impl Camera {
	pub fn coordinates(&self) -> &CoordinateSystem {
		&self.coords
	}

	pub fn set_coordinates(&mut self, coords: CoordinateSystem) {
		self.coords = coords;
	}

	pub fn viewport_size(&self) -> DVec2 {
		self.viewport_size
	}

	pub fn dist_to_screen(&self) -> f64 {
		self.dist_to_screen
	}

	pub fn scale(&self) -> f64 {
		self.scale
	}

	pub fn is_perspective(&self) -> bool {
		self.perspective
	}

	/// Configure a perspective projection.
	pub fn set_screen_params(&mut self, viewport_size: DVec2, scale: f64) {
		self.viewport_size = viewport_size;
		self.scale = scale;
		self.perspective = true;
	}

	/// Configure an orthographic projection.
	pub fn set_screen_params_parallel(&mut self, scale: f64, viewport_size: DVec2) {
		self.viewport_size = viewport_size;
		self.scale = scale;
		self.perspective = false;
	}

	pub fn set_viewport_size(&mut self, viewport_size: DVec2) {
		self.viewport_size = viewport_size;
	}

	/// The world-space position of a viewport pixel, placed at the given view-space depth.
	pub fn screen_to_world(&self, screen: DVec2, depth: f64) -> DVec3 {
		let centered = screen - self.viewport_size / 2.;
		let units_per_pixel = self.units_per_pixel(depth);
		let view = DVec3::new(centered.x * units_per_pixel, -centered.y * units_per_pixel, depth);
		self.coords.from_local().transform_point3(view)
	}

	/// The viewport pixel a world-space point projects onto.
	pub fn world_to_screen(&self, world: DVec3) -> DVec2 {
		let view = self.coords.to_local().transform_point3(world);
		let units_per_pixel = self.units_per_pixel(view.z);
		DVec2::new(view.x / units_per_pixel, -view.y / units_per_pixel) + self.viewport_size / 2.
	}

	/// The world-space displacement matching a screen-space delta, evaluated at the depth of `world`.
	///
	/// Positive `dy` is a downward cursor motion, so it maps onto the negated up direction.
	pub fn drag_vector(&self, world: DVec3, dx: f64, dy: f64) -> DVec3 {
		let depth = self.coords.to_local().transform_point3(world).z;
		let units_per_pixel = self.units_per_pixel(depth);
		(self.coords.right_direction() * dx - self.coords.up_direction() * dy) * units_per_pixel
	}

	fn units_per_pixel(&self, depth: f64) -> f64 {
		if self.perspective {
			depth / (self.dist_to_screen * self.scale)
		} else {
			1. / self.scale
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::DVec2;

	const EPSILON: f64 = 1e-9;

	fn parallel_camera() -> Camera {
		let mut camera = Camera::default();
		camera.set_screen_params_parallel(BASE_VIEW_SCALE, DVec2::new(800., 600.));
		camera
	}

	fn perspective_camera() -> Camera {
		let mut camera = Camera::default();
		camera.set_screen_params(DVec2::new(800., 600.), BASE_VIEW_SCALE);
		camera
	}

	#[test]
	fn viewport_center_unprojects_onto_axis() {
		for camera in [parallel_camera(), perspective_camera()] {
			let world = camera.screen_to_world(DVec2::new(400., 300.), 10.);
			assert!((world - DVec3::new(0., 0., 10.)).length() < EPSILON);
		}
	}

	#[test]
	fn screen_world_round_trip() {
		for camera in [parallel_camera(), perspective_camera()] {
			let screen = DVec2::new(135., 482.);
			let world = camera.screen_to_world(screen, 25.);
			let back = camera.world_to_screen(world);
			assert!((back - screen).length() < EPSILON, "projection did not round-trip: {back:?} vs {screen:?}");
		}
	}

	#[test]
	fn parallel_projection_ignores_depth() {
		let camera = parallel_camera();
		let near = camera.screen_to_world(DVec2::new(500., 300.), 1.);
		let far = camera.screen_to_world(DVec2::new(500., 300.), 100.);
		assert!((near.x - far.x).abs() < EPSILON);
		assert!((near.y - far.y).abs() < EPSILON);
	}

	#[test]
	fn perspective_screen_offset_grows_with_depth() {
		let camera = perspective_camera();
		let near = camera.screen_to_world(DVec2::new(500., 300.), 10.);
		let far = camera.screen_to_world(DVec2::new(500., 300.), 20.);
		assert!((far.x - 2. * near.x).abs() < EPSILON);
	}

	#[test]
	fn screen_y_down_maps_to_world_down() {
		let camera = parallel_camera();
		// Below the viewport center on screen means below the camera axis in the world
		let world = camera.screen_to_world(DVec2::new(400., 400.), 10.);
		assert!(world.y < 0.);
	}

	#[test]
	fn drag_vector_follows_cursor() {
		let camera = parallel_camera();
		let anchor = camera.screen_to_world(DVec2::new(400., 300.), 10.);

		let delta = camera.drag_vector(anchor, 100., 50.);

		// 100 px right at 100 px/unit is one unit along +right; 50 px down is half a unit along -up
		assert!((delta - DVec3::new(1., -0.5, 0.)).length() < EPSILON);
	}

	#[test]
	fn drag_vector_scales_with_depth_in_perspective() {
		let camera = perspective_camera();
		let near = camera.drag_vector(DVec3::new(0., 0., 10.), 100., 0.);
		let far = camera.drag_vector(DVec3::new(0., 0., 20.), 100., 0.);
		assert!((far.length() - 2. * near.length()).abs() < EPSILON);
	}
}
