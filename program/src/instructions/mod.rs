pub mod initialize;
pub mod take;
pub mod cancel;
pub mod shared;

pub use initialize::initialize;
pub use take::take;
pub use cancel::cancel;
