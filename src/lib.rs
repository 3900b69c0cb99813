mod credential_concurrency;
mod credential_error;
mod credential_status_entry;
mod credential_validator;
mod credential_verification_result;
mod error;
mod jwt_header;
mod jwt_parts;
mod key_material_resolver;
mod media_type;
mod normalized_credential;
mod presentation_input;
mod presentation_verification_result;
mod presentation_verifier;
mod resolution_request;
mod resolution_request_wire;
mod resolution_response;
mod revocation_checker;
mod revocation_failure_policy;
mod schema_validation_result;
mod status_list_index;
mod validation_result;
mod verifier_config;

pub use crate::{
    credential_concurrency::CredentialConcurrency,
    credential_error::{CredentialError, CredentialFailure},
    credential_status_entry::CredentialStatusEntry,
    credential_validator::CredentialValidator,
    credential_verification_result::CredentialVerificationResult,
    error::Error,
    jwt_header::JWTHeader,
    jwt_parts::{parse_credential_payload, split_jwt, JWTParts},
    key_material_resolver::KeyMaterialResolver,
    media_type::MediaType,
    normalized_credential::NormalizedCredential,
    presentation_input::PresentationInput,
    presentation_verification_result::PresentationVerificationResult,
    presentation_verifier::PresentationVerifier,
    resolution_request::ResolutionRequest,
    resolution_request_wire::ResolutionRequestWire,
    resolution_response::{ResolutionResponse, ResolutionResponseType},
    revocation_checker::RevocationChecker,
    revocation_failure_policy::RevocationFailurePolicy,
    schema_validation_result::{SchemaValidationOutcome, SchemaValidationResult},
    status_list_index::StatusListIndex,
    validation_result::ValidationResult,
    verifier_config::VerifierConfig,
};
pub type Result<T> = std::result::Result<T, Error>;
