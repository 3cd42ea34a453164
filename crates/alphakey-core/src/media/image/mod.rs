pub mod alpha_codec;
pub mod coords;
pub mod order;

pub use alpha_codec::{embed_byte, extract_byte, AlphaCodec};
pub use coords::index_to_coordinates;
pub use order::VisitationOrder;
