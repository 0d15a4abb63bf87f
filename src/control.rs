pub(crate) mod config;
pub(crate) mod key;
pub(crate) mod state;
pub(crate) mod unlock;
