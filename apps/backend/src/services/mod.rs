pub mod provisioning;
pub mod rounds;
