mod intersection;
pub use self::intersection::Intersection;

mod sphere;
pub use self::sphere::Sphere;

mod sphere_list;
pub use self::sphere_list::SphereList;
