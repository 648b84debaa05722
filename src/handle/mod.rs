//! Store capability contract.
//!
//! [`StoreHandle`] is the seam between the accessor layer and the externally
//! owned store. [`Committer`] and [`Dispatcher`] are the namespaced
//! forwarders handed to mutation and action transforms.

mod handle;
mod scoped;

pub use handle::StoreHandle;
pub use scoped::{Committer, Dispatcher};
