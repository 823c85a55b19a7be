mod errors;
mod event;
mod feature;
mod model;
mod services;
mod state;

#[allow(unused_imports)]
pub(crate) use errors::RecordsError;
pub(crate) use event::RecordsEvent;
pub(crate) use feature::{RecordsCtx, RecordsFeature};
pub(crate) use model::{LoadPhase, Record};
pub(crate) use services::ApiClient;
