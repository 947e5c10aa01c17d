pub mod categories;
pub mod types;

pub use categories::{Cargo, TipoConvenio, TipoInstitucion, TipoRenovacion, UnknownCategory};
pub use types::{
    iso_or_empty, ConvenioRecord, ExtractedRecord, Institution, RawDocument, ResolutionRecord,
    Signer, RESOLUTION_TYPE,
};
