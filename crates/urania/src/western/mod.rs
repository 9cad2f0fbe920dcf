pub mod rulers;
pub mod signs;

pub use rulers::get_sign_ruler;
pub use signs::{Element, Quality, SignMeta, ZodiacSign, SIGN_SPAN_DEGREES};
