pub mod exr;

mod film;
pub use self::film::{FilmSample, FilmPixel, Film};

mod integrators;
pub use self::integrators::*;

mod output;
pub use self::output::{to_rgb8, write_image};

mod stage;
pub use self::stage::Stage;
