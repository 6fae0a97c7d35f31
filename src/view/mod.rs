mod io;
mod model;
mod session;

pub use model::ViewModel;
pub use session::{LoadFailure, Session};
