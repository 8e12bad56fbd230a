//! Session tables mapping the numeric ids on the wire to host callbacks.

mod functions;
mod importers;

pub(crate) use functions::FunctionRegistry;
pub(crate) use importers::ImporterRegistry;
