pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod orientation;
pub mod params;
pub mod pipeline;
pub mod resize;

pub use decode::decode_image;
pub use dimensions::{calculate_fit_layout, FitLayout};
pub use encode::encode_image;
pub use orientation::{apply_exif_orientation, read_orientation, Orientation};
pub use params::OutputFormat;
pub use pipeline::{render_variant, RenderOptions};
pub use resize::{fit_image, resize_image};
