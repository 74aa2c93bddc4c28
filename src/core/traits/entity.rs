use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::validation::Validate;

/// A CRUD resource: its domain record plus the wire types around it.
///
/// Repositories, services and controllers are written once against this trait;
/// each entity module only supplies its record, requests, response and mapping.
pub trait Entity: Clone + Send + Sync + Unpin + 'static {
    /// Singular display name used in messages, e.g. "Customer"
    const NAME: &'static str;

    type CreateRequest: Validate + DeserializeOwned + Send + 'static;
    type UpdateRequest: Validate + DeserializeOwned + Send + 'static;
    type Response: Serialize + Send + 'static;

    /// Storage-assigned identifier; zero until persisted
    fn id(&self) -> u64;

    fn assign_id(&mut self, id: u64);

    /// New, unsaved record built from a create request
    fn from_create(request: Self::CreateRequest) -> Self;

    /// Identifier an update request targets
    fn update_target(request: &Self::UpdateRequest) -> u64;

    /// Replace the target carried by an update request (path id wins over body)
    fn retarget(request: &mut Self::UpdateRequest, id: u64);

    /// Overwrite every mutable field from the request; the id is left untouched
    fn apply_update(&mut self, request: Self::UpdateRequest);

    fn to_response(&self) -> Self::Response;
}
