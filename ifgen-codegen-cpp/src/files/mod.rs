mod header_h;

pub use header_h::HeaderH;
pub use ifgen_core::GENERATED_HEADER;
