use shared_types::{ConvenioRecord, ExtractedRecord, Institution, ResolutionRecord, Signer};

/// Merge the four partial results into one record.
///
/// Fields are moved as they are; no consistency between them is checked.
pub fn assemble(
    resolution: ResolutionRecord,
    convenio: ConvenioRecord,
    institutions: Vec<Institution>,
    signers: Vec<Signer>,
) -> ExtractedRecord {
    ExtractedRecord {
        resolution,
        convenio,
        institutions,
        signers,
    }
}
