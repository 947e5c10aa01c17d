pub mod convenio;
pub mod institutions;
pub mod resolution;
pub mod signers;

pub use convenio::extract_convenio;
pub use institutions::extract_institutions;
pub use resolution::extract_resolution;
pub use signers::extract_signers;
