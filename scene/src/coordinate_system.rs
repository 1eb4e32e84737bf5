use glam::{DMat4, DVec3, DVec4};
use serde::{Deserialize, Serialize};

/// An orthonormal reference frame: an origin, a facing direction, and an up direction.
///
/// The frame's local axes are `right = up × z`, `up`, and `z`. Cameras look along `+z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
	origin: DVec3,
	z_dir: DVec3,
	up_dir: DVec3,
}

impl Default for CoordinateSystem {
	fn default() -> Self {
		Self {
			origin: DVec3::ZERO,
			z_dir: DVec3::Z,
			up_dir: DVec3::Y,
		}
	}
}

impl CoordinateSystem {
	pub fn new(origin: DVec3, z_dir: DVec3, up_dir: DVec3) -> Self {
		let mut coords = Self { origin, ..Default::default() };
		coords.set_orientation(z_dir, up_dir);
		coords
	}

	pub fn origin(&self) -> DVec3 {
		self.origin
	}

	pub fn z_direction(&self) -> DVec3 {
		self.z_dir
	}

	pub fn up_direction(&self) -> DVec3 {
		self.up_dir
	}

	pub fn right_direction(&self) -> DVec3 {
		self.up_dir.cross(self.z_dir)
	}

	pub fn set_origin(&mut self, origin: DVec3) {
		self.origin = origin;
	}

	/// Set the facing and up directions, re-orthonormalizing so `up ⊥ z`.
	pub fn set_orientation(&mut self, z_dir: DVec3, up_dir: DVec3) {
		if z_dir.length_squared() < f64::EPSILON {
			log::warn!("degenerate facing direction {z_dir:?}, falling back to +Z");
		}
		let z_dir = z_dir.try_normalize().unwrap_or(DVec3::Z);
		let up_dir = (up_dir - z_dir * up_dir.dot(z_dir)).try_normalize().unwrap_or_else(|| z_dir.any_orthonormal_vector());
		self.z_dir = z_dir;
		self.up_dir = up_dir;
	}

	/// The transform taking local coordinates into the parent space.
	pub fn from_local(&self) -> DMat4 {
		DMat4::from_cols(
			self.right_direction().extend(0.),
			self.up_dir.extend(0.),
			self.z_dir.extend(0.),
			self.origin.extend(1.),
		)
	}

	/// The transform taking parent-space coordinates into this frame.
	pub fn to_local(&self) -> DMat4 {
		let right = self.right_direction();
		let rotation = DMat4::from_cols(
			DVec4::new(right.x, self.up_dir.x, self.z_dir.x, 0.),
			DVec4::new(right.y, self.up_dir.y, self.z_dir.y, 0.),
			DVec4::new(right.z, self.up_dir.z, self.z_dir.z, 0.),
			DVec4::W,
		);
		rotation * DMat4::from_translation(-self.origin)
	}

	/// Move only the origin through `transform`, leaving the orientation untouched.
	pub fn transform_origin(&mut self, transform: DMat4) {
		self.origin = transform.transform_point3(self.origin);
	}

	/// Move the whole frame (origin and axes) through `transform`.
	pub fn transform_coordinates(&mut self, transform: DMat4) {
		self.origin = transform.transform_point3(self.origin);
		let z_dir = transform.transform_vector3(self.z_dir);
		let up_dir = transform.transform_vector3(self.up_dir);
		self.set_orientation(z_dir, up_dir);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPSILON: f64 = 1e-10;

	#[test]
	fn orientation_is_orthonormalized() {
		let coords = CoordinateSystem::new(DVec3::ZERO, DVec3::new(0., 0., 2.), DVec3::new(0., 1., 1.));

		assert!((coords.z_direction().length() - 1.).abs() < EPSILON);
		assert!((coords.up_direction().length() - 1.).abs() < EPSILON);
		assert!(coords.z_direction().dot(coords.up_direction()).abs() < EPSILON);
	}

	#[test]
	fn local_transforms_round_trip() {
		let coords = CoordinateSystem::new(DVec3::new(3., -2., 7.), DVec3::new(1., 1., 0.), DVec3::Y);
		let point = DVec3::new(0.5, -4., 2.);

		let round_tripped = coords.from_local().transform_point3(coords.to_local().transform_point3(point));
		assert!((round_tripped - point).length() < EPSILON);
	}

	#[test]
	fn origin_maps_to_local_zero() {
		let coords = CoordinateSystem::new(DVec3::new(1., 2., 3.), DVec3::Z, DVec3::Y);
		assert!(coords.to_local().transform_point3(coords.origin()).length() < EPSILON);
	}

	#[test]
	fn transform_origin_leaves_axes_alone() {
		let mut coords = CoordinateSystem::new(DVec3::ZERO, DVec3::Z, DVec3::Y);
		let before = (coords.z_direction(), coords.up_direction());

		coords.transform_origin(DMat4::from_translation(DVec3::new(0., 5., 0.)));

		assert_eq!(coords.origin(), DVec3::new(0., 5., 0.));
		assert_eq!((coords.z_direction(), coords.up_direction()), before);
	}

	#[test]
	fn transform_coordinates_rotates_axes() {
		let mut coords = CoordinateSystem::new(DVec3::ZERO, DVec3::Z, DVec3::Y);

		coords.transform_coordinates(DMat4::from_rotation_y(std::f64::consts::FRAC_PI_2));

		assert!((coords.z_direction() - DVec3::X).length() < EPSILON);
		assert!((coords.up_direction() - DVec3::Y).length() < EPSILON);
	}
}
