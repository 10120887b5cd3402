pub mod make;
pub mod refund;
pub mod take;
pub mod take_dual_program;
pub mod take_same_program;

pub use make::*;
pub use refund::*;
pub use take::*;
pub use take_dual_program::*;
pub use take_same_program::*;
