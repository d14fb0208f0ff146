//! Individual step implementations for product creation

pub mod step1;
pub mod step2;
pub mod step3;
pub mod step4;

pub use step1::step1_create_product;
pub use step2::step2_set_variant_price;
pub use step3::step3_attach_to_collection;
pub use step4::step4_attach_media;
