//! Image decoding and GPU textures.

mod decode;
mod gpu;
mod library;

pub use decode::{decode_cube_faces, decode_rgba, DecodedImage};
pub use gpu::Texture;
pub use library::{TextureId, TextureLibrary};
