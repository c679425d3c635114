// Interface adapters: wire protocol and host-side implementations of domain ports.

pub mod protocol;
pub mod utils;
