//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::point_cloud_support_point::{
    point_cloud_lex_max, point_cloud_lex_min, point_cloud_support_point,
    point_cloud_support_point_id,
};

mod ccw_face_normal;
mod point_cloud_support_point;
