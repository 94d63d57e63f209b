// export modules
pub mod api;
pub mod exchange;
pub mod params;
pub mod rpc;
pub mod tool;

pub use api::*;
pub use exchange::*;
pub use params::*;
pub use tool::*;
