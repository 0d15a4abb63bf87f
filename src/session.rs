pub(crate) mod host;
pub(crate) mod input;
pub(crate) mod script;
