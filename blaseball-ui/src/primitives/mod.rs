mod cross;
mod underline;

pub use cross::Cross;
pub use underline::Underline;
