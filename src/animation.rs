pub(crate) mod ease;
pub(crate) mod snap;
