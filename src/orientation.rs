//! Board regions, crop boxes, quadrant cropping and whole-tree rotation

pub mod cropbox;
pub mod cropping;
pub mod region;
pub mod rotate;

pub use cropbox::Cropbox;
pub use cropping::{Cropper, get_quad_crop_from_movetree, minimal_bounding_box};
pub use region::BoardRegion;
pub use rotate::{
    AutoRotateCropPrefs, auto_rotate_crop, auto_rotate_game, find_canonical_rotation,
    flip_movetree, rotate_movetree,
};
