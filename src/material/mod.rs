mod lights;
pub use self::lights::PointLight;

mod material;
pub use self::material::Material;

pub mod phong;
